use horizons_clock::{
    CountdownScheduler, FixedClock, FrameInstant, HorizonsClock, RecordingSurface, SharedText,
};

fn main() {
    let reading = FrameInstant::from_civil(2026, 8, 6, 9, 30, 15, 250).unwrap();
    let time = SharedText::new();
    let date = SharedText::new();

    let mut clock = HorizonsClock::new(FixedClock::new(reading), RecordingSurface::new())
        .with_time_sink(Box::new(time.clone()))
        .with_date_sink(Box::new(date.clone()));
    clock.run(&mut CountdownScheduler::new(1));

    println!("time {}  date {}", time.get(), date.get());
    let surface = clock.into_surface();
    for arc in &surface.arcs {
        println!(
            "r={:>5.1}  sweep={:>7.4} rad  color={}",
            arc.radius,
            arc.sweep(),
            arc.color
        );
    }
}
