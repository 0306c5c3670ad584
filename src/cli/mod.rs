pub mod banks;
pub mod details;
pub mod download;
pub mod query;

use clap::{Args, Parser, Subcommand};

use crate::criteria::LookupCriteria;

#[derive(Parser)]
#[command(
    name = "cep-lookup",
    version,
    about = "Query Banxico's CEP service for SPEI payment receipts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up a payment and print the receipt summary
    Query {
        #[command(flatten)]
        criteria: CriteriaArgs,
    },
    /// Download the payment receipt as a file
    Download {
        #[command(flatten)]
        criteria: CriteriaArgs,
        /// Receipt format
        #[arg(long, default_value = "pdf", value_parser = ["xml", "pdf", "zip"])]
        format: String,
        /// Output file path
        #[arg(long)]
        output: String,
    },
    /// Fetch the receipt XML and print the structured payment details
    Details {
        #[command(flatten)]
        criteria: CriteriaArgs,
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List SPEI participating institutions
    Banks {
        /// Find an institution by name (case-insensitive substring)
        #[arg(long)]
        find: Option<String>,
    },
}

/// Lookup criteria shared by the payment subcommands.
#[derive(Args)]
pub struct CriteriaArgs {
    /// Operation date, dd-mm-yyyy (dd/mm/yyyy also accepted)
    #[arg(long)]
    pub date: String,
    /// How the payment is identified: T (tracking key) or R (reference)
    #[arg(long, default_value = "T")]
    pub criterion_type: String,
    /// The tracking key or reference value
    #[arg(long)]
    pub criterion: String,
    /// SPEI code of the sending bank
    #[arg(long)]
    pub sender_bank: String,
    /// SPEI code of the receiving bank
    #[arg(long)]
    pub receiver_bank: String,
    /// Beneficiary account (CLABE, card or cell number)
    #[arg(long)]
    pub account: String,
    /// Payment amount, e.g. 1500.00
    #[arg(long)]
    pub amount: String,
}

impl From<CriteriaArgs> for LookupCriteria {
    fn from(args: CriteriaArgs) -> Self {
        LookupCriteria {
            date: args.date,
            criterion_type: args.criterion_type,
            criterion: args.criterion,
            sender_bank_code: args.sender_bank,
            receiver_bank_code: args.receiver_bank,
            beneficiary_account: args.account,
            amount: args.amount,
        }
    }
}
