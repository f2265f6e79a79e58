pub mod plane_file;
pub mod seed_arg;
