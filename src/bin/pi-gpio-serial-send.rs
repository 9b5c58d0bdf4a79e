#[macro_use]
extern crate clap;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

extern crate pi_gpio_serial;
use pi_gpio_serial::*;

use std::process::exit;
use std::time::Duration;

use pi_gpio_serial::gpio::{
	GpioSerial,
	Pin,
};
use pi_gpio_serial::mmio::DevGpioMem;
use pi_gpio_serial::serial::{
	BitOrder,
	Protocol,
	SampleEdge,
	SerialTransmitter,
};

fn get_param<T>(matches: &clap::ArgMatches, name: &str) -> AResult<T>
where
	T: std::str::FromStr,
	failure::Error: From<<T as std::str::FromStr>::Err>,
{
	let param = match matches.value_of(name) {
		Some(p) => p,
		None => bail!("missing parameter {}", name),
	};
	param.parse::<T>().map_err(|e| {
		let e = failure::Error::from(e);
		let msg = format!("invalid parameter {}: {}", name, e);
		e.context(msg).into()
	})
}

fn parse_hex_bytes(s: &str) -> AResult<Vec<u8>> {
	ensure!(s.is_ascii(), "hex payload must be ASCII hex digits: {:?}", s);
	ensure!(0 == s.len() % 2, "hex payload needs an even number of digits: {:?}", s);

	let mut bytes = Vec::with_capacity(s.len() / 2);
	for i in (0..s.len()).step_by(2) {
		let byte = u8::from_str_radix(&s[i..i + 2], 16).map_err(|e| {
			format_err!("invalid hex payload at offset {}: {}", i, e)
		})?;
		bytes.push(byte);
	}
	Ok(bytes)
}

fn transmit<T: SerialTransmitter>(mut serial: T, payload: &[u8], repeat: usize) -> AResult<()> {
	serial.initialize()?;
	for _ in 0..repeat {
		serial.send(payload)?;
	}
	serial.release();
	Ok(())
}

fn main_app() -> AResult<()> {
	let matches = clap_app!(@app (app_from_crate!())
		(@arg CLOCK: +required "GPIO line for the clock signal (BCM number)")
		(@arg DATA: +required "GPIO line for the data signal (BCM number)")
		(@arg PAYLOAD: +required "bytes to send, as hex digits (e.g. a1ff00)")
		(@arg lsb_first: --("lsb-first") "send each byte least significant bit first")
		(@arg falling_edge: --("falling-edge") "pulse the clock low from a high idle")
		(@arg settle_ns: --("settle-ns") +takes_value "hold time after each line transition, in nanoseconds")
		(@arg mem_base: --("mem-base") +takes_value "map /dev/mem at this SoC peripheral base (hex) instead of trying /dev/gpiomem first")
		(@arg repeat: -n --repeat +takes_value "send the payload this many times")
	).get_matches();

	let clock: Pin = get_param(&matches, "CLOCK")?;
	let data: Pin = get_param(&matches, "DATA")?;
	let payload = match matches.value_of("PAYLOAD") {
		Some(p) => parse_hex_bytes(p)?,
		None => bail!("missing parameter PAYLOAD"),
	};

	let mut protocol = Protocol::default();
	if matches.is_present("lsb_first") {
		protocol.bit_order = BitOrder::LsbFirst;
	}
	if matches.is_present("falling_edge") {
		protocol.sample_edge = SampleEdge::Falling;
	}
	if matches.is_present("settle_ns") {
		let settle: u64 = get_param(&matches, "settle_ns")?;
		protocol.settle = Duration::from_nanos(settle);
	}

	let repeat: usize = if matches.is_present("repeat") {
		get_param(&matches, "repeat")?
	} else {
		1
	};

	let memory = match matches.value_of("mem_base") {
		None => DevGpioMem::default(),
		Some(base) => {
			let digits = base.trim_start_matches("0x");
			let base = u64::from_str_radix(digits, 16).map_err(|e| {
				format_err!("invalid parameter mem_base: {}", e)
			})?;
			DevGpioMem::with_base(base)
		}
	};

	let mut serial = GpioSerial::with_memory(memory, clock, data, protocol)?;
	info!("{}: sending {} byte(s), {} time(s)", serial, payload.len(), repeat);
	transmit(&mut serial, &payload, repeat)
}

fn main() {
	env_logger::from_env(env_logger::Env::default().default_filter_or("info")).init();

	if let Err(e) = main_app() {
		error!("Error: {}", e);
		// eprintln!("Backtrace: {:?}", e.backtrace());
		exit(1);
	}
}
