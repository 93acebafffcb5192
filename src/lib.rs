pub mod long;
pub mod store;

pub use long::{Long, Sign};
pub use store::{DigitStore, LinkedStore, MapStore, SeqStore};

mod util {
    pub mod rng;
}
