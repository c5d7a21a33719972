//! Thin printing adapter: the view model is computed in `skycast-core`,
//! this module only writes it out.

use skycast_core::{App, ForecastView, StatusKind};

/// Print the outcome of the last action: the fresh view on success, the
/// status message otherwise. Errors go to stderr.
pub fn report(app: &App) {
    match app.status().kind {
        StatusKind::Success => {
            if let Some(view) = app.view() {
                print_view(view);
            }
            println!("{}", app.status().message);
        }
        StatusKind::Error => eprintln!("{}", app.status().message),
        StatusKind::Neutral => {
            if !app.status().message.is_empty() {
                println!("{}", app.status().message);
            }
        }
    }
}

pub fn print_view(view: &ForecastView) {
    let current = &view.current;
    println!("{}", current.place);
    println!("{}  {}", current.temperature, current.summary);
    println!("{}   {}   {}", current.wind, current.humidity, current.updated);

    if !view.hourly.is_empty() {
        println!();
        println!("Next hours");
        for hour in &view.hourly {
            println!("  {:<6} {:>7}  {}", hour.label, hour.temperature, hour.summary);
        }
    }

    if !view.daily.is_empty() {
        println!();
        println!("Daily");
        for day in &view.daily {
            println!(
                "  {:<4} {:<11} {:>13}  {}",
                day.weekday, day.date, day.temperatures, day.summary
            );
        }
    }

    println!();
}
