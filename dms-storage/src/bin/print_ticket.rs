use dms_printer::{EscPosDriver, UsbPrinter, UsbTarget};
use dms_storage::cli::TicketArgs;
use dms_storage::logger::init_logger;
use dms_storage::{Config, TicketFormatter, TicketRequest};

fn main() -> anyhow::Result<()> {
    // Arguments first: a bad invocation never touches the printer
    let args = TicketArgs::parse_fields();

    dotenvy::dotenv().ok();
    let config = Config::from_env();
    init_logger(config.log_level.as_deref(), config.log_dir.as_deref());

    let request = TicketRequest::from(args);

    let usb = UsbPrinter::open(UsbTarget::default())?;
    let driver = EscPosDriver::open(usb)?;
    TicketFormatter::new(driver).print_ticket(&request)?;

    Ok(())
}
