use ghub_derive::ghub_error;
use std::borrow::Cow;

#[ghub_error]
pub enum DemoError {
    #[error("IO error{}: {source}", fmt_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", fmt_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {}
