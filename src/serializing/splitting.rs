use serde_json::Value;

/// A value on its way into a statement. Hoisted sequences are replaced by a
/// reference to the global holding them.
#[derive(Debug)]
pub(super) enum Fragment<'a> {
    Value(&'a Value),
    Part(String),
    List(Vec<Fragment<'a>>),
}

impl<'a> Fragment<'a> {
    pub fn render(&self) -> serde_json::Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> serde_json::Result<()> {
        match self {
            Fragment::Value(value) => out.push_str(&serde_json::to_string(value)?),
            Fragment::Part(name) => out.push_str(name),
            Fragment::List(items) => {
                out.push('[');
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        out.push(',');
                    }
                    item.render_into(out)?;
                }
                out.push(']');
            }
        }
        Ok(())
    }
}

/// Hoists nested sequences, deepest first, into generated globals.
///
/// A sequence weighs one plus the weight of its elements; scalars, mappings
/// and references to hoisted parts weigh one. Any sequence heavier than the
/// threshold is handed to `hoist`, which returns the name to reference it by.
pub(super) fn split<'a, F>(
    value: &'a Value,
    threshold: usize,
    hoist: &mut F,
) -> serde_json::Result<(Fragment<'a>, usize)>
where
    F: FnMut(Fragment<'a>) -> serde_json::Result<String>,
{
    let items = match value {
        Value::Array(items) => items,
        other => return Ok((Fragment::Value(other), 1)),
    };
    let mut weight = 1;
    let mut children = Vec::with_capacity(items.len());
    for item in items {
        let (child, child_weight) = split(item, threshold, hoist)?;
        weight += child_weight;
        children.push(child);
    }
    let list = Fragment::List(children);
    if weight > threshold {
        Ok((Fragment::Part(hoist(list)?), 1))
    } else {
        Ok((list, weight))
    }
}
