use clap::Parser;
use inspector::config::AppConfig;
use inspector::input::{decode_balance, read_input, render};
use shared::error::{AsDecodeError, AsIoError, AsRenderError, MainError};

fn main() -> Result<(), MainError> {
    let config = AppConfig::parse();

    config.log.init();

    tracing::info!(
        input = %config.input.display(),
        format = %config.input_format,
        "Reading account balance"
    );

    let bytes = read_input(&config.input).into_io_error()?;

    let balance =
        decode_balance(&bytes, config.input_format).into_decode_error()?;

    let output = render(&balance, config.output).into_render_error()?;

    println!("{}", output);

    Ok(())
}
