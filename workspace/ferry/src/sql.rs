use bqwire::TableReference;

pub fn create_or_replace(target: &TableReference, source: &TableReference) -> String {
  format!(
    "CREATE OR REPLACE TABLE {} AS SELECT * FROM {}",
    target.quoted(),
    source.quoted()
  )
}

pub fn drop_table(target: &TableReference) -> String {
  format!("DROP TABLE IF EXISTS {}", target.quoted())
}
