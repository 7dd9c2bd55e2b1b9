use chrono::Local;
use horizons_clock::{FrameInstant, HorizonsDate, RingPercentages};

fn main() {
    let instant = FrameInstant::from_datetime(&Local::now());
    let date = HorizonsDate::from_ordinal(instant.year, instant.ordinal);
    let p = RingPercentages::compute(&instant, &date);

    println!("Local time:    {}", instant.time_string());
    println!("Horizons date: {date}");
    println!("second {:7.3}%   minute {:7.3}%   hour {:7.3}%", p.second, p.minute, p.hour);
    println!("day    {:7.3}%   month  {:7.3}%", p.day, p.month);
}
