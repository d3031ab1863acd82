mod lifespan;
mod side;

pub use lifespan::Lifespan;
pub use side::Side;
