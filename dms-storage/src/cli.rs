//! `print-ticket` arguments

use std::ffi::OsString;

use clap::Parser;

use crate::request::TicketRequest;

const BIN_NAME: &str = "print-ticket";

/// Print a DMS storage ticket and its receipt
///
/// Every argument is a field value, so values such as "-fragile" or
/// "--help" print as written.
#[derive(Debug, Parser)]
#[command(name = BIN_NAME)]
pub struct TicketArgs {
    /// Expiration date as printed, e.g. "March 5"
    #[arg(allow_hyphen_values = true)]
    pub expiration_date: String,
    #[arg(allow_hyphen_values = true)]
    pub name: String,
    #[arg(allow_hyphen_values = true)]
    pub email: String,
    /// Storage type, e.g. "pallet"
    #[arg(value_name = "TYPE", allow_hyphen_values = true)]
    pub item_type: String,
    #[arg(allow_hyphen_values = true)]
    pub description: String,
    /// Submission time, e.g. "2017-02-20 21:52"
    #[arg(allow_hyphen_values = true)]
    pub print_time: String,
}

impl TicketArgs {
    /// Parse the process arguments as field values, exiting with usage on bad arity
    pub fn parse_fields() -> Self {
        Self::try_parse_fields(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse `args` (program name first) with no option handling at all
    pub fn try_parse_fields<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(|arg| -> OsString { arg.into() });
        let bin = args.next().unwrap_or_else(|| OsString::from(BIN_NAME));
        Self::try_parse_from(
            std::iter::once(bin)
                .chain(std::iter::once(OsString::from("--")))
                .chain(args),
        )
    }
}

impl From<TicketArgs> for TicketRequest {
    fn from(args: TicketArgs) -> Self {
        Self {
            expiration_date: args.expiration_date,
            name: args.name,
            email: args.email,
            item_type: args.item_type,
            description: args.description,
            print_time: args.print_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_positionals() {
        let args = TicketArgs::try_parse_fields([
            "print-ticket",
            "March 5",
            "Brandon Green",
            "brandonagr@gmail.com",
            "small",
            "short description",
            "2017-02-01 10:00",
        ])
        .unwrap();

        let req = TicketRequest::from(args);
        assert_eq!(req.expiration_date, "March 5");
        assert_eq!(req.item_type, "small");
        assert_eq!(req.print_time, "2017-02-01 10:00");
    }

    #[test]
    fn test_missing_fields_rejected() {
        let result = TicketArgs::try_parse_fields(["print-ticket", "March 5", "Brandon Green"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_fields_accepted() {
        let args = TicketArgs::try_parse_fields(["print-ticket", "", "", "", "", "", ""]).unwrap();
        assert_eq!(TicketRequest::from(args), TicketRequest::default());
    }

    #[test]
    fn test_extra_argument_rejected() {
        let result =
            TicketArgs::try_parse_fields(["print-ticket", "a", "b", "c", "d", "e", "f", "g"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_hyphen_leading_description() {
        let args = TicketArgs::try_parse_fields([
            "print-ticket",
            "March 5",
            "Brandon Green",
            "brandonagr@gmail.com",
            "pallet",
            "-fragile, top shelf",
            "2017-02-20 21:52",
        ])
        .unwrap();
        assert_eq!(args.description, "-fragile, top shelf");

        // Hyphen values alone are enough without the separator
        let args = TicketArgs::try_parse_from([
            "print-ticket",
            "March 5",
            "Brandon Green",
            "brandonagr@gmail.com",
            "pallet",
            "-fragile, top shelf",
            "2017-02-20 21:52",
        ])
        .unwrap();
        assert_eq!(args.description, "-fragile, top shelf");
    }

    #[test]
    fn test_flag_like_values_printed_verbatim() {
        let args = TicketArgs::try_parse_fields([
            "print-ticket",
            "--help",
            "-h",
            "--",
            "--version",
            "--help",
            "-V",
        ])
        .unwrap();

        let req = TicketRequest::from(args);
        assert_eq!(req.expiration_date, "--help");
        assert_eq!(req.name, "-h");
        assert_eq!(req.email, "--");
        assert_eq!(req.item_type, "--version");
        assert_eq!(req.description, "--help");
        assert_eq!(req.print_time, "-V");
    }

    #[test]
    fn test_missing_fields_after_hyphen_value_rejected() {
        let result = TicketArgs::try_parse_fields(["print-ticket", "-x", "--help"]);
        assert!(result.is_err());
    }
}
