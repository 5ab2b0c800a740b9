use clap::Parser;
use kindling_converter::report::ConversionReport;
use kindling_converter::{Args, Capture, Converter};
use log::{debug, info};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.configuration()?;

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    let capture = Capture::load(&args.capture)?;
    let (context, events) = capture.into_parts();
    info!(
        "Loaded {} event(s), {} thread(s), {} fd(s) from {}",
        events.len(),
        context.thread_count(),
        context.fd_count(),
        args.capture.display()
    );
    debug!("Converter settings: {:?}", config.converter);

    let converter = Converter::new(context, config.converter.clone());
    let mut report = ConversionReport::new();

    for raw in &events {
        match converter.convert(raw) {
            Ok(event) => {
                report.record(&event);
                let line = if config.output.pretty {
                    serde_json::to_string_pretty(&event)?
                } else {
                    serde_json::to_string(&event)?
                };
                println!("{}", line);
            }
            Err(err) => {
                debug!("Dropped event at {}: {}", raw.ts, err);
                report.record_dropped();
            }
        }
    }

    info!("{}", report.summary());
    if config.is_verbose() {
        debug!("{}", report.to_json()?);
    }

    Ok(())
}
