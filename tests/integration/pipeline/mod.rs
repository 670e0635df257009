mod utils;

mod choose;
mod detect;
mod matrix;
