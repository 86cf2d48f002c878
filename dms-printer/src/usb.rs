//! USB printer transport
//!
//! Talks to the printer's bulk OUT endpoint through libusb.

use crate::driver::Transport;
use crate::error::{PrintError, PrintResult};
use rusb::{DeviceHandle, Direction, GlobalContext, TransferType};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Epson
pub const EPSON_VENDOR_ID: u16 = 0x04b8;
/// TM-T20 series receipt printer
pub const TM_T20_PRODUCT_ID: u16 = 0x0e15;

const WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// Which USB device and interface to open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsbTarget {
    pub vendor_id: u16,
    pub product_id: u16,
    pub interface: u8,
}

impl Default for UsbTarget {
    fn default() -> Self {
        Self {
            vendor_id: EPSON_VENDOR_ID,
            product_id: TM_T20_PRODUCT_ID,
            interface: 0,
        }
    }
}

/// USB-attached receipt printer
///
/// Holds the claimed interface until dropped.
pub struct UsbPrinter {
    handle: DeviceHandle<GlobalContext>,
    target: UsbTarget,
    endpoint: u8,
    reattach_kernel_driver: bool,
}

impl UsbPrinter {
    /// Open the device, claim the interface and locate the bulk OUT endpoint
    #[instrument(fields(vendor_id = target.vendor_id, product_id = target.product_id))]
    pub fn open(target: UsbTarget) -> PrintResult<Self> {
        let mut handle = rusb::open_device_with_vid_pid(target.vendor_id, target.product_id)
            .ok_or(PrintError::DeviceNotFound {
                vendor_id: target.vendor_id,
                product_id: target.product_id,
            })?;

        // Not supported on every platform; treat as "no kernel driver bound"
        let reattach_kernel_driver = handle
            .kernel_driver_active(target.interface)
            .unwrap_or(false);
        if reattach_kernel_driver {
            handle.detach_kernel_driver(target.interface)?;
        }

        handle.claim_interface(target.interface)?;
        let endpoint = find_bulk_out(&handle, target.interface)?;

        info!(endpoint = endpoint, "Printer opened");

        Ok(Self {
            handle,
            target,
            endpoint,
            reattach_kernel_driver,
        })
    }
}

fn find_bulk_out(handle: &DeviceHandle<GlobalContext>, interface: u8) -> PrintResult<u8> {
    let config = handle.device().active_config_descriptor()?;

    for iface in config.interfaces().filter(|i| i.number() == interface) {
        for desc in iface.descriptors() {
            for ep in desc.endpoint_descriptors() {
                if ep.direction() == Direction::Out && ep.transfer_type() == TransferType::Bulk {
                    return Ok(ep.address());
                }
            }
        }
    }

    Err(PrintError::EndpointNotFound(interface))
}

impl Transport for UsbPrinter {
    fn send(&mut self, data: &[u8]) -> PrintResult<()> {
        let mut remaining = data;
        while !remaining.is_empty() {
            let written = self
                .handle
                .write_bulk(self.endpoint, remaining, WRITE_TIMEOUT)?;
            if written == 0 {
                return Err(PrintError::Io(std::io::Error::new(
                    std::io::ErrorKind::WriteZero,
                    "printer accepted no data",
                )));
            }
            remaining = &remaining[written..];
        }
        Ok(())
    }
}

impl Drop for UsbPrinter {
    fn drop(&mut self) {
        if let Err(e) = self.handle.release_interface(self.target.interface) {
            warn!(error = %e, "Release interface failed");
        }
        if self.reattach_kernel_driver
            && let Err(e) = self.handle.attach_kernel_driver(self.target.interface)
        {
            warn!(error = %e, "Reattach kernel driver failed");
        }
    }
}
