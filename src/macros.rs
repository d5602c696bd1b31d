use std::fmt;

pub struct RenderNode<F>(pub F);
impl<F> fmt::Display for RenderNode<F>
where
    F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}

/// Attribute names are bare idents or, for names an ident cannot spell
/// (`data-open`, `data-toggle`), string literals.
#[macro_export]
macro_rules! attr_name {
    ($name:ident) => {
        stringify!($name)
    };
    ($name:literal) => {
        $name
    };
}

#[macro_export]
macro_rules! node {
    ($kind:ident $(, $attr:tt = $val:expr )* => $($child:expr),+ $(,)?) => {
        $crate::macros::RenderNode(move |f: &mut std::fmt::Formatter<'_>| {
            write!(f, "<{}", stringify!($kind))?;
            $(write!(f, r#" {}="{}""#, $crate::attr_name!($attr), $val)?;)*
            write!(f, ">")?;
            $(write!(f, "{}", $child)?;)+
            write!(f, "</{}>", stringify!($kind))
        })
    };

    ($kind:ident $(, $attr:tt = $val:expr )* $(,)?) => {
        $crate::macros::RenderNode(move |f: &mut std::fmt::Formatter<'_>| {
            write!(f, "<{}", stringify!($kind))?;
            $(write!(f, r#" {}="{}""#, $crate::attr_name!($attr), $val)?;)*
            write!(f, " />")
        })
    };
}
