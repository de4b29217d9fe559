//! Print TypeScript declarations for the JSON the API returns.

use db::models::{
    affirmation::{IAffirmation, YouAffirmation},
    category::Category,
    custom_inspiration::{CreateCustomInspiration, CustomInspiration, UpdateCustomInspiration},
    journal_entry::{CreateJournalEntry, JournalEntry, Mood},
    quote::Quote,
};
use server::routes::listing::{AffirmationsResponse, QuotesResponse};
use services::services::{database_validator::ValidationResult, journal::JournalStats};
use ts_rs::TS;

fn main() {
    let decls = [
        Quote::decl(),
        Category::decl(),
        IAffirmation::decl(),
        YouAffirmation::decl(),
        Mood::decl(),
        JournalEntry::decl(),
        CreateJournalEntry::decl(),
        JournalStats::decl(),
        CustomInspiration::decl(),
        CreateCustomInspiration::decl(),
        UpdateCustomInspiration::decl(),
        ValidationResult::decl(),
        QuotesResponse::<Quote>::decl(),
        AffirmationsResponse::<IAffirmation>::decl(),
    ];

    println!("// Generated by `cargo run --bin generate_types`. Do not edit.\n");
    for decl in decls {
        println!("export {decl}\n");
    }
}
