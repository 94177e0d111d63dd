//! Form controls and containers shared by every view.

mod button;
mod card;
mod input;
mod spinner;

pub use button::{Button, ButtonVariant};
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
pub use input::{Input, Label, Textarea};
pub use spinner::Spinner;
pub use crate::toast::{described, use_toast, ToastOptions};
