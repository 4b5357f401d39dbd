use serde_json::{Map, Value};

/// Run `f` on the object stored under `key`. A missing key, or one holding
/// something other than an object, starts from an empty object.
pub fn update_object<F>(map: &mut Map<String, Value>, key: &str, f: F)
where
    F: FnOnce(&mut Map<String, Value>),
{
    let mut object = match map.remove(key) {
        Some(Value::Object(object)) => object,
        _ => Map::new(),
    };
    f(&mut object);
    map.insert(key.to_string(), Value::Object(object));
}

/// [`update_object`] along a path of keys, creating intermediate objects.
pub fn update_path<F>(map: &mut Map<String, Value>, path: &[&str], f: F)
where
    F: FnOnce(&mut Map<String, Value>),
{
    match path.split_first() {
        None => f(map),
        Some((key, rest)) => update_object(map, key, |inner| update_path(inner, rest, f)),
    }
}

/// The object under `key` if one is already there.
pub fn existing_object<'a>(
    map: &'a mut Map<String, Value>,
    key: &str,
) -> Option<&'a mut Map<String, Value>> {
    map.get_mut(key).and_then(Value::as_object_mut)
}

/// Mutable iterator over the object elements of the array under `key`.
/// Non-object elements are skipped.
pub fn objects_in_array<'a>(
    map: &'a mut Map<String, Value>,
    key: &str,
) -> impl Iterator<Item = &'a mut Map<String, Value>> {
    map.get_mut(key)
        .and_then(Value::as_array_mut)
        .into_iter()
        .flat_map(|items| items.iter_mut().filter_map(Value::as_object_mut))
}

/// Set `<key>.color`, preserving the other fields of that object.
pub fn set_nested_color(map: &mut Map<String, Value>, key: &str, color: &str) {
    update_object(map, key, |object| set_str(object, "color", color));
}

pub fn set_str(map: &mut Map<String, Value>, key: &str, value: &str) {
    map.insert(key.to_string(), Value::from(value));
}

/// Whether `map[key]` is a non-empty string.
pub fn has_str(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key).and_then(Value::as_str).is_some_and(|s| !s.is_empty())
}
