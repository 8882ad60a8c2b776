pub mod border;
pub mod dimension;
pub mod flex;

pub use border::{Border, BorderStyle};
pub use dimension::{Dimension, Margins, PageSize};
pub use flex::{FlexDirection, FlexWrap, JustifyContent};
