//! Host-side simulation of a ten-unit split-flap row.
//!
//! Rotates through a short playlist, printing the coil frame every few polls
//! and the settled text at the end of each cycle. Uses a printing port and a
//! sleeping delay in place of real hardware.

use embedded_hal::delay::DelayNs;
use splitflap_motion::{
    output::pack, ActuationPort, ActuationSignal, CompensationRatio, DisplayConfig, Playlist,
    Result, RowState, SplitFlapDisplay,
};

/// Port that keeps the latest packed frame for printing.
struct ConsolePort {
    frame: [u8; 5],
}

impl ActuationPort for ConsolePort {
    fn apply(&mut self, signals: &[ActuationSignal]) -> Result<()> {
        if let Ok(row) = <[ActuationSignal; 10]>::try_from(signals) {
            let packed = pack(&row);
            self.frame.copy_from_slice(&packed[..5]);
        }
        Ok(())
    }
}

/// Delay provider backed by the host clock.
struct HostDelay;

impl DelayNs for HostDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
    }
}

fn main() -> Result<()> {
    println!("=== Split-Flap Row Simulation ===\n");

    let mut config = DisplayConfig::with_units(10);
    // Run faster than real hardware so the demo finishes quickly
    config.timing.rolling_delay_us = 50;
    config.timing.idle_delay_ms = 500;

    let mut display = SplitFlapDisplay::<_, 10>::builder()
        .from_config(&config)?
        .port(ConsolePort { frame: [0; 5] })
        .build()?;

    // These drums overshoot a little less than the default ratio assumes
    display
        .scheduler_mut()
        .encoder_mut()
        .set_compensation(CompensationRatio::new(639, 640))?;

    let mut playlist = Playlist::new(&["HELLO", "SPLIT FLAP", "RUST"]);
    let mut delay = HostDelay;

    let mut polls = 0u32;
    let mut cycles = 0;
    while cycles < playlist.len() {
        let status = display.poll_source(&mut playlist)?;
        polls += 1;

        if status.state.is_rolling() && polls % 250 == 0 {
            println!("  frame {:02x?}", display.port().frame);
        }

        if status.state == RowState::Completing {
            cycles += 1;
            println!(
                "cycle {} settled: [{}] after {} polls",
                display.scheduler().completed_cycles(),
                display.scheduler().settled_text(),
                polls
            );
            polls = 0;
        }

        delay.delay_us(status.next_delay_us);
    }

    Ok(())
}
