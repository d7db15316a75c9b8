mod args;
mod logger;

use std::fmt::Write;

use anyhow::{ensure, Context, Result};
use i2csim_core::{check_payloads, MockBus, Scenario};
use i2csim_decode::{decode_frames, decode_register_accesses};
use log::LevelFilter;

use crate::args::{Args, USAGE};

fn main() -> Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    logger::init(level).context("failed to install logger")?;

    let scenario = Scenario::load_or_default(args.config.as_deref())?;
    let bus = run(&scenario)?;

    if args.trace {
        print_trace(&bus)?;
    }
    Ok(())
}

/// Runs the read then the write of `scenario`, checking each against its
/// expected record. Returns the bus so its trace can be inspected.
fn run(scenario: &Scenario) -> Result<MockBus> {
    let read = scenario.read;
    let mut bus = MockBus::seeded(read.seed);

    let value = bus
        .register_read(read.device_address, read.register_address)
        .context("[main]: Failed to read register from I2C device")?;

    let expected = read.expected();
    check_payloads(&bus.record(), &expected).context("[main]: I2C read is incorrect")?;
    ensure!(
        value == read.seed,
        "[main]: I2C read is incorrect: got 0x{value:02X}, device holds 0x{:02X}",
        read.seed
    );
    println!("[main]: I2C read is correct");
    println!("{expected}");

    // Simulate the device being cleared between transfers.
    bus.reset();

    let write = scenario.write;
    bus.register_write(write.device_address, write.register_address, write.data)
        .context("[main]: Failed to write data to I2C device")?;

    let expected = write.expected();
    check_payloads(&bus.record(), &expected).context("[main]: I2C write is incorrect")?;
    println!("[main]: I2C write is correct");
    println!("{expected}");

    Ok(bus)
}

fn print_trace(bus: &MockBus) -> Result<()> {
    print!("{}", render_trace(bus)?);
    Ok(())
}

/// Trace text, decoded frames and register accesses, as printed by `--trace`.
fn render_trace(bus: &MockBus) -> Result<String> {
    let mut out = String::new();
    writeln!(out)?;
    writeln!(out, "Bus trace:")?;
    out.push_str(&bus.trace().to_text(true));

    let frames = decode_frames(bus.trace().entries());
    writeln!(out)?;
    writeln!(out, "Frames:")?;
    for frame in &frames {
        writeln!(
            out,
            "{} 0x{:02X} [{}] {}",
            if frame.rw { "R" } else { "W" },
            frame.address,
            hex::encode_upper(&frame.data),
            if frame.acked { "ACK" } else { "NACK" },
        )?;
    }

    let accesses = decode_register_accesses(&frames);
    writeln!(out)?;
    writeln!(out, "Register accesses:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&accesses)?)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use i2csim_core::{ReadStep, TransactionRecord, WriteStep};

    #[test]
    fn test_run_default_scenario() {
        let bus = run(&Scenario::default()).unwrap();

        assert_eq!(bus.record(), TransactionRecord::new(0x8A, 0x10, 0x55));
        assert_eq!(bus.trace().entries().len(), 3);
    }

    #[test]
    fn test_run_rejects_eight_bit_read_address() {
        let scenario = Scenario {
            read: ReadStep {
                device_address: 0x80,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = run(&scenario).unwrap_err();

        assert!(format!("{err:#}").contains("does not fit in 7 bits"));
        assert!(err.to_string().contains("Failed to read register"));
    }

    #[test]
    fn test_run_rejects_eight_bit_write_address() {
        let scenario = Scenario {
            write: WriteStep {
                device_address: 0xC5,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = run(&scenario).unwrap_err();

        assert!(err.to_string().contains("Failed to write data"));
    }

    #[test]
    fn test_render_trace_after_run() {
        let bus = run(&Scenario::default()).unwrap();
        let text = render_trace(&bus).unwrap();

        assert!(text.contains("Z] TX 0xA1: 20\n"));
        assert!(text.contains("W 0x50 [20] ACK\n"));
        assert!(text.contains("R 0x50 [30] ACK\n"));
        assert!(text.contains("W 0x45 [1055] ACK\n"));
        assert!(text.contains(r#""kind": "read""#));
        assert!(text.contains(r#""kind": "write""#));
        assert!(text.contains(r#""value": 85"#));
    }
}
