/// Case-insensitive substring containment in either direction.
///
/// This is the loose matching rule used across the whole pipeline: "Tomatoes"
/// matches "tomato", and "beef" matches "ground beef". Deliberately forgiving,
/// since detection output and catalog ingredient strings rarely agree on
/// plurals or qualifiers.
pub fn loosely_matches(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}
