// Plain-text rendering of an analysis report
use crate::analyzer::price_analysis::AnalysisReport;
use crate::analyzer::trend::TrendDirection;
use crate::analyzer::moving_average::SignalDirection;
use std::fmt::Write;

const NOT_ENOUGH_DATA: &str = "Not enough data";

fn money(value: f64) -> String {
    format!("${:.2}", value)
}

fn signed_percent(value: f64) -> String {
    format!("{}{:.1}%", if value >= 0.0 { "+" } else { "" }, value)
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

pub fn render(label: &str, report: &AnalysisReport) -> String {
    let mut out = String::new();
    write_report(&mut out, label, report)
        .map(|_| out)
        .unwrap_or_default()
}

fn write_report(out: &mut String, label: &str, r: &AnalysisReport) -> std::fmt::Result {
    writeln!(out, "📊 Price Analysis: {}", label)?;
    writeln!(out, "   Window: {} .. {}", r.view_start, r.view_end)?;
    writeln!(out)?;

    writeln!(out, "💰 Current price: {}", money(r.current_price))?;
    writeln!(
        out,
        "   Summary: mean {} | median {} | mode {} | min {} | max {} | {} reports | {:.0} lbs",
        money(r.summary.mean),
        money(r.summary.median),
        money(r.summary.mode),
        money(r.summary.min),
        money(r.summary.max),
        r.summary.count,
        r.summary.total_pounds
    )?;

    let arrow = match r.trend.direction {
        TrendDirection::Up => "↑ up",
        TrendDirection::Down => "↓ down",
        TrendDirection::Flat => "→ flat",
    };
    writeln!(
        out,
        "📈 Trend: {} ({} change, slope {:.3}/report)",
        arrow,
        signed_percent(r.trend.change_percent),
        r.trend.slope
    )?;
    writeln!(
        out,
        "   Volatility: {} (CV {:.1}%, std dev {})",
        r.volatility.level.label(),
        r.volatility.coefficient_of_variation,
        money(r.volatility.standard_deviation)
    )?;
    writeln!(
        out,
        "🎯 Percentile: {:.0}th - {}",
        r.percentile.current_percentile, r.percentile.interpretation
    )?;
    writeln!(out, "   Recommendation: {}", r.recommendation.label())?;

    writeln!(out)?;
    writeln!(out, "Moving averages:")?;
    let averages = [
        ("7-Day", r.moving_averages.ma7, r.ma_deviation.ma7),
        ("30-Day", r.moving_averages.ma30, r.ma_deviation.ma30),
        ("90-Day", r.moving_averages.ma90, r.ma_deviation.ma90),
    ];
    for (name, value, deviation) in averages {
        match (value, deviation) {
            (Some(v), Some(dev)) => {
                writeln!(out, "   {:<7} {} ({})", name, money(v), signed_percent(dev))?
            }
            (Some(v), None) => writeln!(out, "   {:<7} {}", name, money(v))?,
            _ => writeln!(out, "   {:<7} {}", name, NOT_ENOUGH_DATA)?,
        }
    }
    for signal in &r.signals {
        let tag = match signal.direction {
            SignalDirection::Rising => "Rising",
            SignalDirection::Falling => "Falling",
        };
        writeln!(out, "   • {} [{}]", signal.description, tag)?;
    }

    writeln!(out)?;
    match &r.support_resistance {
        Some(levels) => {
            writeln!(
                out,
                "Support: {} | Resistance: {}",
                money(levels.support),
                money(levels.resistance)
            )?;
            writeln!(
                out,
                "   Near support: {} | Near resistance: {}",
                yes_no(levels.near_support),
                yes_no(levels.near_resistance)
            )?;
        }
        None => writeln!(out, "Support/Resistance: {}", NOT_ENOUGH_DATA)?,
    }

    match &r.yoy {
        Some(yoy) => writeln!(
            out,
            "Year over year: {} -> {} ({}, {} vs {} reports)",
            money(yoy.last_year_avg),
            money(yoy.current_avg),
            signed_percent(yoy.change_percent),
            yoy.data_points.current,
            yoy.data_points.last_year
        )?,
        None => writeln!(out, "Year over year: {}", NOT_ENOUGH_DATA)?,
    }

    match &r.seasonal {
        Some(s) => {
            writeln!(
                out,
                "Seasonality: best {} | worst {} | this month {}",
                s.best_month,
                s.worst_month,
                money(s.current_month_avg)
            )?;
            for m in &s.monthly_averages {
                writeln!(out, "   {:<10} {}", m.month, money(m.avg))?;
            }
        }
        None => writeln!(out, "Seasonality: {}", NOT_ENOUGH_DATA)?,
    }

    if let (Some(best), Some(worst)) = (&r.best_day, &r.worst_day) {
        writeln!(
            out,
            "Day of week: best {} ({}) | worst {} ({})",
            best.day,
            money(best.avg),
            worst.day,
            money(worst.avg)
        )?;
    }

    Ok(())
}
