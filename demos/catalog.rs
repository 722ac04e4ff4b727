//! Seeds the sample catalog, prints it as a table, then edits and deletes a document.
//!
//! Run with `RUST_LOG=debug` to see the repository's log events.

use research_db::{Catalog, Column, DocumentTable, RepositoryError, SortOrder};
use tracing_subscriber::EnvFilter;

fn print_table(table: &DocumentTable) {
    let headers: Vec<&str> = Column::ALL.iter().map(|c| table.header(*c)).collect();
    println!("{}", headers.join(" | "));
    for row in 0..table.row_count() {
        let cells: Vec<String> = Column::ALL
            .iter()
            .filter_map(|c| table.cell(row, *c))
            .collect();
        println!("{}", cells.join(" | "));
    }
    println!();
}

fn main() -> Result<(), RepositoryError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut catalog = Catalog::with_defaults();
    print_table(&catalog.table());

    if let Some(mut draft) = catalog.draft() {
        draft.set_title("On Indexes");
        draft.set_body("Keeping three indexes in step.");
        catalog.insert(&draft)?;

        catalog.edit(draft.id(), |doc| {
            doc.authors_mut().push("Edwin Dusty".into());
        })?;
    }
    catalog.delete(5)?;

    let mut table = catalog.table();
    table.sort(Column::Authors, SortOrder::Ascending);
    print_table(&table);

    for doc in catalog.repository().find_many_by_author("Edwin Dusty") {
        println!("Edwin Dusty wrote #{}: {}", doc.id(), doc.title());
    }
    Ok(())
}
