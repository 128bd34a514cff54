// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run with `cargo run --example main`. Set `COLOR_VALUE_LOG=debug` to see rejected input
//! being logged.

use std::str::FromStr;

use miette::IntoDiagnostic;
use r3bl_color_value::{Color, PaintedText};
use tracing::{Level, info, warn};

const LOG_LEVEL_ENV_VAR: &str = "COLOR_VALUE_LOG";

fn main() -> miette::Result<()> {
    let level = std::env::var(LOG_LEVEL_ENV_VAR)
        .ok()
        .and_then(|it| Level::from_str(&it).ok())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    // Each color painted with its own hex code.
    {
        let colors = [
            Color::black(),
            Color::white(),
            Color::from_rgb_u8(255, 0, 0),
            Color::try_from_rgb(0, 255, 0)?,
            Color::try_from_hex("#0000FF")?,
            Color::try_from_hex("0x2F14DF")?,
        ];
        for color in colors {
            println!("{} {:?} {:?}", color.paint(None), color.to_rgb(), color.to_hsv());
        }
    }

    // Sweep around the hue wheel.
    {
        for step in 0..12_u8 {
            let hue = f64::from(step) / 12.0;
            let color = Color::try_from_hsv(hue, 1.0, 1.0)?;
            let msg = format!("> hue {hue:.2} is {color}");
            PaintedText {
                text: &msg,
                color,
            }
            .println();
        }
    }

    // Colors in a config file are hex strings.
    {
        let theme: Vec<Color> =
            serde_json::from_str(r##"["#FD2F53", "0x532FFD", "#057ff1"]"##).into_diagnostic()?;
        info!(?theme, "loaded theme");
        let json = serde_json::to_string(&theme).into_diagnostic()?;
        info!(%json, "saved theme");
    }

    // Rejected input.
    {
        for text in ["#GG0000", "#1000000"] {
            if let Err(error) = Color::from_str(text) {
                warn!(%error, kind = ?error.kind(), "rejected input");
            }
        }
    }

    Ok(())
}
