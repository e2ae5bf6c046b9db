//! Lenient declaration-list parser built on `cssparser`.

use cssparser::{Delimiter, ParseError as CssParseError, Parser, ParserInput, Token};

use crate::types::Color;
use crate::{Error, Result};

/// A single understood declaration from a style string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Declaration {
    /// `background-color`, `background` or `-fx-background-color`.
    Background(Color),
    /// `color` or `-fx-text-fill`.
    TextColor(Color),
    /// `border-radius`, `-fx-border-radius` or `-fx-background-radius`.
    CornerRadius(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Property {
    Background,
    TextColor,
    CornerRadius,
}

impl Property {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "background-color" | "background" | "-fx-background-color" => Some(Self::Background),
            "color" | "-fx-text-fill" => Some(Self::TextColor),
            "border-radius" | "-fx-border-radius" | "-fx-background-radius" => {
                Some(Self::CornerRadius)
            }
            _ => None,
        }
    }
}

/// Parse a declaration list into the declarations this crate understands.
///
/// Declarations are returned in source order; callers applying them should
/// let later ones win. Unknown properties are skipped at debug level,
/// malformed values of known properties are skipped with a warning.
///
/// # Example
///
/// ```
/// use glow_style::parser::{Declaration, parse_declarations};
///
/// let decls = parse_declarations("-fx-border-radius: 12; -fx-cursor: hand; color: nope;");
/// assert_eq!(decls, vec![Declaration::CornerRadius(12.0)]);
/// ```
pub fn parse_declarations(css: &str) -> Vec<Declaration> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut declarations = Vec::new();

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        match parser.parse_until_after(Delimiter::Semicolon, |p| parse_declaration(p)) {
            Ok(Some(declaration)) => declarations.push(declaration),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(
                    target: "glow_style::parser",
                    line = e.location.line,
                    column = e.location.column,
                    "Skipping malformed declaration: {:?}",
                    e.kind
                );
            }
        }
    }

    declarations
}

/// Parse one `name: value` pair, up to but excluding its semicolon.
fn parse_declaration<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Option<Declaration>, CssParseError<'i, ()>> {
    let name = parser.expect_ident()?.to_string();
    parser.expect_colon()?;

    let Some(property) = Property::from_name(&name) else {
        tracing::debug!(
            target: "glow_style::parser",
            property = %name,
            "Ignoring unsupported property"
        );
        skip_declaration(parser);
        return Ok(None);
    };

    let value = match property {
        Property::Background => parse_color(parser).map(Declaration::Background),
        Property::TextColor => parse_color(parser).map(Declaration::TextColor),
        Property::CornerRadius => parse_radius(parser).map(Declaration::CornerRadius),
    };

    let result = match value {
        Ok(declaration) => Some(declaration),
        Err(e) => {
            tracing::warn!(
                target: "glow_style::parser",
                property = %name,
                "Failed to parse property value: {:?}",
                e.kind
            );
            None
        }
    };

    // Extra values (e.g. per-corner radii) are not used.
    skip_declaration(parser);

    Ok(result)
}

/// Parse one color value, rejecting malformed or trailing input.
pub(crate) fn parse_color_strict(css: &str) -> Result<Color> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    let color = parse_color(&mut parser).map_err(|_| Error::invalid_color(css))?;

    parser.skip_whitespace();
    if !parser.is_exhausted() {
        return Err(Error::trailing_input(css));
    }

    Ok(color)
}

/// Parse a color value.
fn parse_color<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Color, CssParseError<'i, ()>> {
    parser.skip_whitespace();

    let token = parser.next()?;

    match token.clone() {
        Token::Hash(hash) | Token::IDHash(hash) => {
            let hex_str = format!("#{}", hash);
            Color::from_hex(&hex_str).ok_or_else(|| parser.new_custom_error(()))
        }
        Token::Ident(name) => match name.as_ref().to_ascii_lowercase().as_str() {
            "transparent" => Ok(Color::TRANSPARENT),
            "black" => Ok(Color::BLACK),
            "white" => Ok(Color::WHITE),
            "red" => Ok(Color::RED),
            "green" => Ok(Color::GREEN),
            "blue" => Ok(Color::BLUE),
            "gray" | "grey" => Ok(Color::GRAY),
            _ => Err(parser.new_custom_error(())),
        },
        Token::Function(name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            // Either function name takes three or four components.
            let (r, g, b, a) = parser.parse_nested_block(|p| {
                let r = parse_color_component(p)?;
                p.expect_comma()?;
                let g = parse_color_component(p)?;
                p.expect_comma()?;
                let b = parse_color_component(p)?;
                let a = if p.try_parse(|p| p.expect_comma()).is_ok() {
                    parse_alpha_component(p)?
                } else {
                    1.0
                };
                p.expect_exhausted()?;
                Ok::<_, CssParseError<'_, ()>>((r, g, b, a))
            })?;
            Ok(Color::new(r, g, b, a))
        }
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_color_component<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<f32, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    match parser.next()? {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 255.0) / 255.0),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_alpha_component<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<f32, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    match parser.next()? {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse a corner radius: a unitless number or a `px` length.
fn parse_radius<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<f32, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    let radius = match parser.next()? {
        Token::Number { value, .. } => *value,
        Token::Dimension { value, unit, .. } if unit.eq_ignore_ascii_case("px") => *value,
        _ => return Err(parser.new_custom_error(())),
    };

    if radius < 0.0 {
        return Err(parser.new_custom_error(()));
    }
    Ok(radius)
}

/// Skip the rest of the current declaration (error recovery).
///
/// Only called inside a parser delimited by the declaration's semicolon.
fn skip_declaration(parser: &mut Parser<'_, '_>) {
    while parser.next().is_ok() {}
}
