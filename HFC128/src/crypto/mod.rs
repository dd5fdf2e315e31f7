pub mod f_function;
pub mod hfc128;
pub mod key_schedule;
pub mod propagation;
