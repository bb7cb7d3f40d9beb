use brandlink_client::{ClientError, InquiryService};
use brandlink_core::format::format_date;
use brandlink_core::InquiryStatus;
use clap::Subcommand;
use uuid::Uuid;

use crate::campaigns::truncate;

/// Sub-commands available under `inquiries`.
#[derive(Debug, Subcommand)]
pub enum InquiryCommands {
    /// Inquiries addressed to the signed-in influencer
    Mine,
    /// Answer an inquiry (CONTACTED, NEGOTIATING, ACCEPTED, DECLINED, COMPLETED)
    Respond {
        id: Uuid,
        status: InquiryStatus,
        #[arg(long)]
        response: Option<String>,
    },
}

pub(crate) async fn run_inquiries(
    service: &InquiryService,
    command: InquiryCommands,
) -> Result<(), ClientError> {
    match command {
        InquiryCommands::Mine => {
            let inquiries = service.my_inquiries().await?;
            if inquiries.is_empty() {
                println!("no inquiries yet");
                return Ok(());
            }
            println!(
                "{:<38}{:<26}{:<13}{:<14}EMAIL",
                "ID", "COMPANY", "STATUS", "RECEIVED"
            );
            for i in &inquiries {
                println!(
                    "{:<38}{:<26}{:<13}{:<14}{}",
                    i.id.to_string(),
                    truncate(&i.company_name, 24),
                    i.status.as_str(),
                    format_date(&i.created_at),
                    i.email
                );
            }
        }
        InquiryCommands::Respond {
            id,
            status,
            response,
        } => {
            let inquiry = service.update_status(id, status, response).await?;
            println!("inquiry {} is now {}", inquiry.id, inquiry.status);
        }
    }
    Ok(())
}
