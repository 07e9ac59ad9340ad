pub mod document;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod text;
pub mod types;

pub use document::{Activation, Document, ListenerGuard, ListenerId};
pub use element::{ancestry, find_element, Content, Element};
pub use event::{Key, Modifiers};
pub use hit::{hit_test, hit_test_any};
pub use layout::{LayoutResult, Rect};
pub use types::*;
