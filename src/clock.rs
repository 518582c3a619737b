//! Menu-bar clock: formatting and the 1s refresh task.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use crate::app::AppMessage;

/// Format a timestamp the way the macOS menu bar clock does:
/// `"Tue Mar 10 1:05 p.m."` — short weekday, short month, unpadded day,
/// 12-hour clock with hour 0 shown as 12, zero-padded minutes, and the
/// literal `a.m.` / `p.m.` meridiem.
pub fn format_menu_bar_time<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    let (is_pm, hour) = now.hour12();
    let meridiem = if is_pm { "p.m." } else { "a.m." };
    format!(
        "{} {} {} {}:{:02} {}",
        now.weekday(),
        month_abbrev(now.month()),
        now.day(),
        hour,
        now.minute(),
        meridiem
    )
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

/// Background task pushing the formatted wall-clock time once per second.
///
/// The first tick fires immediately so the header never shows an empty
/// clock. `tokio::time::interval` keeps cadence from its start instant, so
/// the display does not drift with per-tick scheduling error. The task is
/// aborted on drop; repeated construction never leaks an interval.
pub struct ClockTicker {
    handle: JoinHandle<()>,
}

impl ClockTicker {
    /// Spawn the refresh task, reporting through the app message channel.
    pub fn spawn(tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(1000));
            loop {
                interval.tick().await;
                let display = format_menu_bar_time(&Local::now());
                if tx.send(AppMessage::ClockTick { display }).is_err() {
                    // Receiver gone, the app is shutting down
                    break;
                }
            }
        });
        Self { handle }
    }

    /// Stop the refresh task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_afternoon_format() {
        // 2026-03-10 is a Tuesday
        let dt = Utc.with_ymd_and_hms(2026, 3, 10, 13, 5, 0).unwrap();
        assert_eq!(format_menu_bar_time(&dt), "Tue Mar 10 1:05 p.m.");
    }

    #[test]
    fn test_midnight_renders_twelve() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 9, 0, 0, 0).unwrap();
        assert_eq!(format_menu_bar_time(&dt), "Mon Mar 9 12:00 a.m.");
    }

    #[test]
    fn test_noon_is_pm() {
        let dt = Utc.with_ymd_and_hms(2026, 7, 4, 12, 30, 0).unwrap();
        assert_eq!(format_menu_bar_time(&dt), "Sat Jul 4 12:30 p.m.");
    }

    #[test]
    fn test_minutes_zero_padded() {
        let dt = Utc.with_ymd_and_hms(2025, 11, 28, 9, 7, 0).unwrap();
        assert_eq!(format_menu_bar_time(&dt), "Fri Nov 28 9:07 a.m.");
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_emits_immediately_then_every_second() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = ClockTicker::spawn(tx);

        // First tick is immediate
        let first = rx.recv().await.expect("initial tick");
        assert!(matches!(first, AppMessage::ClockTick { .. }));

        tokio::time::advance(Duration::from_millis(1000)).await;
        assert!(rx.recv().await.is_some());

        ticker.shutdown();
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_stops_on_shutdown() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = ClockTicker::spawn(tx);

        let _ = rx.recv().await;
        ticker.shutdown();
        // Let the abort land, then drain anything sent before it
        tokio::task::yield_now().await;
        assert!(ticker.is_finished());
        while rx.try_recv().is_ok() {}

        tokio::time::advance(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }
}
