use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::TemplateError;
use crate::value::Value;

/// Rendered in place of a placeholder whose argument was not supplied.
pub const MISSING: &str = "{!MISSING}";

// -------------------------------------------------------------------------------------------------
// Template
// -------------------------------------------------------------------------------------------------
/// A format template parsed at runtime.
///
/// Placeholders are `{}` (the next positional argument) and `{N}` (the argument at index `N`).
/// Explicit placeholders do not advance the positional counter. Literal braces are written as
/// `{{` and `}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
    arity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Arg(usize),
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let bytes = source.as_bytes();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut next_positional = 0;
        let mut arity = 0;

        // Braces are ASCII, so every slice boundary below is a char boundary.
        let mut i = 0;
        let mut literal_start = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'{' | b'}' if bytes.get(i + 1) == Some(&bytes[i]) => {
                    literal.push_str(&source[literal_start..=i]);
                    i += 2;
                    literal_start = i;
                }
                b'{' => {
                    literal.push_str(&source[literal_start..i]);
                    let close = source[i + 1..]
                        .find('}')
                        .map(|n| i + 1 + n)
                        .ok_or(TemplateError::Unterminated { offset: i })?;
                    let bad_placeholder = || TemplateError::BadPlaceholder {
                        offset: i,
                        placeholder: source[i..=close].to_string(),
                    };
                    let index = match &source[i + 1..close] {
                        "" => {
                            next_positional += 1;
                            next_positional - 1
                        }
                        inner => parse_index(inner).ok_or_else(bad_placeholder)?,
                    };
                    // The arity must stay representable, which rules out `usize::MAX` as an index.
                    arity = arity.max(index.checked_add(1).ok_or_else(bad_placeholder)?);
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Arg(index));
                    i = close + 1;
                    literal_start = i;
                }
                b'}' => return Err(TemplateError::UnmatchedClose { offset: i }),
                _ => i += 1,
            }
        }
        literal.push_str(&source[literal_start..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Template {
            source: source.to_string(),
            segments,
            arity,
        })
    }

    /// The template text this was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The number of arguments a well-formed call supplies: one more than the highest index
    /// referenced by any placeholder, or 0 when there are no placeholders.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Check that exactly `num_args` arguments match this template.
    pub fn check_arity(&self, num_args: usize) -> Result<(), TemplateError> {
        if num_args == self.arity {
            Ok(())
        } else {
            Err(TemplateError::ArityMismatch {
                expected: self.arity,
                actual: num_args,
            })
        }
    }

    /// Substitute `args` into this template.
    ///
    /// Rendering is lazy: the result is written directly to whatever formats it.
    /// A placeholder without a matching argument renders as [`MISSING`]; arguments past
    /// [`Template::arity`] are appended as ` {!EXTRA a, b}`.
    pub fn apply<'t>(&'t self, args: &'t [Value<'t>]) -> Applied<'t> {
        Applied { template: self, args }
    }
}

fn parse_index(inner: &str) -> Option<usize> {
    if inner.bytes().all(|b| b.is_ascii_digit()) {
        inner.parse().ok()
    } else {
        None
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::parse(s)
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

// -------------------------------------------------------------------------------------------------
// Applied
// -------------------------------------------------------------------------------------------------
/// A template together with its arguments, rendered when formatted.
pub struct Applied<'t> {
    template: &'t Template,
    args: &'t [Value<'t>],
}

impl Display for Applied<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.template.segments {
            match segment {
                Segment::Literal(s) => f.write_str(s)?,
                Segment::Arg(index) => match self.args.get(*index) {
                    Some(value) => value.fmt(f)?,
                    None => f.write_str(MISSING)?,
                },
            }
        }

        let extra = self.args.get(self.template.arity..).unwrap_or_default();
        if !extra.is_empty() {
            f.write_str(" {!EXTRA ")?;
            for (n, value) in extra.iter().enumerate() {
                if n > 0 {
                    f.write_str(", ")?;
                }
                value.fmt(f)?;
            }
            f.write_str("}")?;
        }
        Ok(())
    }
}

// -------------------------------------------------------------------------------------------------
// test
// -------------------------------------------------------------------------------------------------
#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn render(template: &str, args: &[Value]) -> String {
        Template::parse(template).unwrap().apply(args).to_string()
    }

    #[test]
    fn positional() {
        assert_eq!(render("{} + {} = {}", &[1.into(), 2.into(), 3.into()]), "1 + 2 = 3");
        assert_eq!(render("", &[]), "");
        assert_eq!(render("no placeholders", &[]), "no placeholders");
    }

    #[test]
    fn explicit_indices() {
        let t = Template::parse("{1}{0}{1}").unwrap();
        assert_eq!(t.arity(), 2);
        assert_eq!(t.apply(&["a".into(), "b".into()]).to_string(), "bab");
    }

    #[test]
    fn explicit_does_not_advance_positional() {
        assert_eq!(render("{2} {} {}", &["a".into(), "b".into(), "c".into()]), "c a b");
    }

    #[test]
    fn escapes() {
        let t = Template::parse("{{}} {{{}}}").unwrap();
        assert_eq!(t.arity(), 1);
        assert_eq!(t.apply(&[7.into()]).to_string(), "{} {7}");
    }

    #[test]
    fn multibyte_literals() {
        assert_eq!(render("héllo {} wörld ✓", &["—".into()]), "héllo — wörld ✓");
    }

    #[test]
    fn missing_args() {
        assert_eq!(render("{} and {}", &["x".into()]), "x and {!MISSING}");
        assert_eq!(render("{3}", &[]), "{!MISSING}");
    }

    #[test]
    fn extra_args() {
        assert_eq!(render("{}", &[1.into(), 2.into(), true.into()]), "1 {!EXTRA 2, true}");
        assert_eq!(render("done", &["x".into()]), "done {!EXTRA x}");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Template::parse("abc {"), Err(TemplateError::Unterminated { offset: 4 }));
        assert_eq!(Template::parse("a } b"), Err(TemplateError::UnmatchedClose { offset: 2 }));
        assert_eq!(Template::parse("{0}}"), Err(TemplateError::UnmatchedClose { offset: 3 }));
        assert_eq!(
            Template::parse("x {:>5}"),
            Err(TemplateError::BadPlaceholder {
                offset: 2,
                placeholder: "{:>5}".to_string()
            })
        );
        assert_eq!(
            Template::parse("{99999999999999999999999}").unwrap_err().offset(),
            Some(0)
        );

        let largest = format!("{{{}}}", usize::MAX);
        assert_eq!(
            Template::parse(&format!("ab{largest}")),
            Err(TemplateError::BadPlaceholder {
                offset: 2,
                placeholder: largest,
            })
        );
    }

    #[test]
    fn largest_usable_index() {
        let t = Template::parse(&format!("{{{}}}", usize::MAX - 1)).unwrap();
        assert_eq!(t.arity(), usize::MAX);
        assert!(t.check_arity(0).is_err());
        assert_eq!(t.apply(&["x".into()]).to_string(), "{!MISSING}");
    }

    #[test]
    fn arity_checks() {
        let t: Template = "{} {}".parse().unwrap();
        assert_eq!(t.check_arity(2), Ok(()));
        assert_eq!(
            t.check_arity(3),
            Err(TemplateError::ArityMismatch { expected: 2, actual: 3 })
        );
        assert_eq!(Template::parse("plain").unwrap().arity(), 0);
    }

    #[test]
    fn displays_source() {
        let t = Template::parse("{{{}}}").unwrap();
        assert_eq!(t.to_string(), "{{{}}}");
        assert_eq!(t.as_str(), "{{{}}}");
    }

    proptest! {
        #[test]
        fn escaped_text_renders_verbatim(s in ".*") {
            let escaped = s.replace('{', "{{").replace('}', "}}");
            let t = Template::parse(&escaped).unwrap();
            prop_assert_eq!(t.arity(), 0);
            prop_assert_eq!(t.apply(&[]).to_string(), s);
        }

        #[test]
        fn matches_std_format(a in any::<i64>(), b in ".*", c in any::<bool>()) {
            let t = Template::parse("<{}|{}|{}>").unwrap();
            let args = [Value::from(a), Value::from(b.as_str()), Value::from(c)];
            prop_assert_eq!(t.apply(&args).to_string(), format!("<{a}|{b}|{c}>"));
        }
    }
}
