// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Larissa CLI entrypoint.
//!
//! Renders a portfolio JSON export as a Unicode roadmap on stdout. `--demo`
//! uses a built-in portfolio instead of a dataset file.

use std::error::Error;

use larissa::feed;
use larissa::layout::{LayoutConfig, ViewRange};
use larissa::model::fixtures;
use larissa::render::{render_roadmap_unicode, RenderOptions};

const DEFAULT_MONTH_WIDTH_PX: f64 = 100.0;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <dataset.json> [--view <range>] [--month-width <px>]\n  {program} --demo [--view <range>] [--month-width <px>]\n\nRenders the portfolio roadmap as Unicode text on stdout.\n\n--view selects the timeline range (default current14); one of:\n  current14, future14, past14, future24, past24, future36, past36\n--month-width sets the pixel width of one month column (floor 30; default {DEFAULT_MONTH_WIDTH_PX}).\n--demo uses a built-in demo portfolio and cannot be combined with a dataset file."
    );
}

#[derive(Debug, Default, Clone, PartialEq)]
struct CliOptions {
    demo: bool,
    dataset: Option<String>,
    view: Option<String>,
    month_width: Option<f64>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--view" => {
                if options.view.is_some() {
                    return Err(());
                }
                let view = args.next().ok_or(())?;
                options.view = Some(view);
            }
            "--month-width" => {
                if options.month_width.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let px: f64 = raw.parse().map_err(|_| ())?;
                if !px.is_finite() || px <= 0.0 {
                    return Err(());
                }
                options.month_width = Some(px);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.dataset.is_some() {
                    return Err(());
                }
                options.dataset = Some(arg);
            }
        }
    }

    if options.demo && options.dataset.is_some() {
        return Err(());
    }

    if !options.demo && options.dataset.is_none() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "larissa".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let view: ViewRange = match options.view.as_deref() {
            Some(raw) => raw.parse()?,
            None => ViewRange::Current14,
        };

        let rows = match options.dataset.as_deref() {
            None => fixtures::demo_portfolio(),
            Some(path) => {
                let portfolio = feed::load_portfolio(path)?;
                if portfolio.dropped_milestones() > 0 || portfolio.dropped_phases() > 0 {
                    eprintln!(
                        "larissa: dropped {} milestone(s) and {} phase(s) with unparseable dates",
                        portfolio.dropped_milestones(),
                        portfolio.dropped_phases()
                    );
                }
                portfolio.into_rows()
            }
        };

        let today = chrono::Local::now().date_naive();
        let month_width = options.month_width.unwrap_or(DEFAULT_MONTH_WIDTH_PX);
        let window = view.window(today, month_width);

        let rendered = render_roadmap_unicode(
            &rows,
            &window,
            &LayoutConfig::default(),
            &RenderOptions::default(),
        )?;
        println!("{rendered}");

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("larissa: {err}");
        std::process::exit(1);
    }
}
