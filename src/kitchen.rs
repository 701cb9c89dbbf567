//! Runs the kitchen: cook, shuffle, serve.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::condiments::CondimentsTray;
use crate::config::KitchenConfig;
use crate::cook::Cook;
use crate::error::Result;
use crate::reporter::serve_cook;

/// RNG for shuffling: seeded when a seed is given, from OS entropy otherwise
pub fn shuffle_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Cook one meal and serve it from `tray`.
///
/// Returns the cook so callers can inspect what was served.
pub fn serve_meal<R, W>(tray: &mut CondimentsTray, rng: &mut R, out: &mut W) -> Result<Cook>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    let mut cook = Cook::new();
    cook.add_ingredients();
    cook.prepare(rng)?;
    serve_cook(&cook, tray, out)?;
    Ok(cook)
}

/// Serve `config.servings` meals from one tray built from `config`.
///
/// The tray is shared across servings, so it ends with one mint sauce per
/// meal. The final tray is returned.
pub fn run<R, W>(config: &KitchenConfig, rng: &mut R, out: &mut W) -> Result<CondimentsTray>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    config.validate()?;
    let mut tray = config.tray();

    for serving in 1..=config.servings {
        info!("Serving meal {} of {}", serving, config.servings);
        serve_meal(&mut tray, rng, out)?;
    }

    Ok(tray)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condiments::MINT_SAUCE;
    use crate::cook::PLATE_SIZE;
    use crate::error::EggsampleError;

    #[test]
    fn test_serve_meal_prints_three_lines() {
        let mut tray = CondimentsTray::default();
        let mut out = Vec::new();
        let cook = serve_meal(&mut tray, &mut shuffle_rng(Some(5)), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            format!("Your food. Enjoy some {}", cook.ingredients().unwrap().join(", "))
        );
        assert_eq!(
            lines[1],
            "Some condiments? We have pickled walnuts, steak sauce, mushy peas, mint sauce"
        );
        assert_eq!(lines[2], "Now this is what I call a condiments tray!");
        assert_eq!(cook.ingredients().unwrap().len(), PLATE_SIZE);
    }

    #[test]
    fn test_run_is_reproducible_with_seed() {
        let config = KitchenConfig::default();

        let mut first = Vec::new();
        run(&config, &mut shuffle_rng(Some(11)), &mut first).unwrap();
        let mut second = Vec::new();
        run(&config, &mut shuffle_rng(Some(11)), &mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_run_multiple_servings_share_tray() {
        let config = KitchenConfig {
            servings: 3,
            ..KitchenConfig::default()
        };
        let mut out = Vec::new();
        let tray = run(&config, &mut shuffle_rng(Some(1)), &mut out).unwrap();

        assert_eq!(tray.count(MINT_SAUCE), 3);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 9);
        assert!(text.ends_with("mushy peas, mint sauce, mint sauce, mint sauce\nNow this is what I call a condiments tray!\n"));
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let config = KitchenConfig {
            servings: 0,
            ..KitchenConfig::default()
        };
        let mut out = Vec::new();
        let err = run(&config, &mut shuffle_rng(Some(1)), &mut out).unwrap_err();
        assert!(matches!(err, EggsampleError::Config(_)));
        assert!(out.is_empty());
    }
}
