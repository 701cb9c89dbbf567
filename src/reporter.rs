//! Serving report
//!
//! Writes the meal and the condiments tray to any `io::Write` sink. The binary
//! passes locked stdout; tests pass a `Vec<u8>`.

use std::io::Write;

use tracing::debug;

use crate::condiments::{CondimentsTray, prep_condiments};
use crate::cook::Cook;
use crate::error::Result;

/// Prefix of the ingredients line
pub const FOOD_PREFIX: &str = "Your food. Enjoy some ";

/// Prefix of the condiments line
pub const CONDIMENTS_PREFIX: &str = "Some condiments? We have ";

/// Separator used for both lists
pub const LIST_SEPARATOR: &str = ", ";

/// Build the report lines for a plate and a tray that has already been topped up.
///
/// Returns two lines plus one per commentary entry.
pub fn format_serving(
    ingredients: &[String],
    tray: &CondimentsTray,
    commentary: &[String],
) -> Vec<String> {
    let mut lines = Vec::with_capacity(2 + commentary.len());
    lines.push(format!("{FOOD_PREFIX}{}", ingredients.join(LIST_SEPARATOR)));
    lines.push(format!(
        "{CONDIMENTS_PREFIX}{}",
        tray.items().join(LIST_SEPARATOR)
    ));
    lines.extend(commentary.iter().cloned());
    lines
}

/// Top up `tray` and write the serving report for `ingredients` to `out`.
///
/// The tray gains one mint sauce per call, even if writing fails afterwards.
pub fn serve<W: Write + ?Sized>(
    ingredients: &[String],
    tray: &mut CondimentsTray,
    out: &mut W,
) -> Result<()> {
    let commentary = prep_condiments(tray);
    let lines = format_serving(ingredients, tray, &commentary);
    debug!(
        "Serving {} ingredients with {} condiments",
        ingredients.len(),
        tray.len()
    );

    for line in &lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

/// Serve whatever `cook` has prepared.
///
/// An uninitialized cook fails before the tray is touched or anything is
/// written.
pub fn serve_cook<W: Write + ?Sized>(
    cook: &Cook,
    tray: &mut CondimentsTray,
    out: &mut W,
) -> Result<()> {
    let ingredients = cook.ingredients()?;
    serve(ingredients, tray, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condiments::MINT_SAUCE;
    use crate::error::EggsampleError;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_serve_exact_output() {
        let mut tray = CondimentsTray::new(["pickled walnuts"]);
        let mut out = Vec::new();
        serve(&strings(&["egg", "salt"]), &mut tray, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Your food. Enjoy some egg, salt\n\
             Some condiments? We have pickled walnuts, mint sauce\n\
             Now this is what I call a condiments tray!\n"
        );
    }

    #[test]
    fn test_format_serving_without_commentary() {
        let tray = CondimentsTray::new(["steak sauce"]);
        let lines = format_serving(&strings(&["egg"]), &tray, &[]);
        assert_eq!(
            lines,
            vec![
                "Your food. Enjoy some egg".to_string(),
                "Some condiments? We have steak sauce".to_string(),
            ]
        );
    }

    #[test]
    fn test_format_serving_empty_plate() {
        let tray = CondimentsTray::new(Vec::<String>::new());
        let lines = format_serving(&[], &tray, &[]);
        assert_eq!(lines[0], "Your food. Enjoy some ");
        assert_eq!(lines[1], "Some condiments? We have ");
    }

    #[test]
    fn test_serve_twice_lists_mint_sauce_twice() {
        let mut tray = CondimentsTray::new(["pickled walnuts"]);
        let mut out = Vec::new();
        serve(&strings(&["egg"]), &mut tray, &mut out).unwrap();
        serve(&strings(&["egg"]), &mut tray, &mut out).unwrap();

        assert_eq!(tray.count(MINT_SAUCE), 2);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Some condiments? We have pickled walnuts, mint sauce, mint sauce\n"));
    }

    #[test]
    fn test_serve_cook_uninitialized() {
        let cook = Cook::new();
        let mut tray = CondimentsTray::default();
        let mut out = Vec::new();

        let err = serve_cook(&cook, &mut tray, &mut out).unwrap_err();
        assert!(matches!(err, EggsampleError::Uninitialized(_)));
        assert!(out.is_empty());
        assert_eq!(tray, CondimentsTray::default());
    }

    #[test]
    fn test_serve_reports_write_failure() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut tray = CondimentsTray::default();
        let err = serve(&strings(&["egg"]), &mut tray, &mut Closed).unwrap_err();
        assert!(matches!(err, EggsampleError::Io(_)));
        assert_eq!(tray.count(MINT_SAUCE), 1);
    }
}
