//! Parsing of component labels such as `ThinLens(f = 5)`
use super::{ComponentKind, OpticalComponent};
use crate::error::{OpticsError, OptResult};
use std::str::FromStr;
use strum::IntoEnumIterator;

fn not_a_component(text: &str) -> OpticsError {
    OpticsError::TypeCondition(format!("'{text}' does not describe an optical component"))
}
/// Split `Name(k = v, ...)` into the name and the (optional) argument list.
fn split_label(text: &str) -> OptResult<(&str, Option<&str>)> {
    match text.split_once('(') {
        Some((name, rest)) => {
            let args = rest
                .trim_end()
                .strip_suffix(')')
                .ok_or_else(|| not_a_component(text))?;
            Ok((name.trim(), Some(args)))
        }
        None => Ok((text, None)),
    }
}
fn parse_values(kind: ComponentKind, args: Option<&str>) -> OptResult<Vec<f64>> {
    let parameters = kind.parameters();
    let mut values: Vec<Option<f64>> = vec![None; parameters.len()];
    for assignment in args
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .into_iter()
        .flat_map(|a| a.split(','))
    {
        let Some((key, value)) = assignment.split_once('=') else {
            return Err(OpticsError::TypeCondition(format!(
                "'{}' is not a parameter assignment of {kind}",
                assignment.trim()
            )));
        };
        let key = key.trim();
        let idx = parameters
            .iter()
            .position(|p| p.key == key)
            .ok_or_else(|| {
                OpticsError::TypeCondition(format!("{kind} has no parameter '{key}'"))
            })?;
        if values[idx].is_some() {
            return Err(OpticsError::TypeCondition(format!(
                "parameter '{key}' of {kind} given more than once"
            )));
        }
        let value = value.trim().parse::<f64>().map_err(|_| {
            OpticsError::TypeCondition(format!(
                "value '{}' of parameter '{key}' is not a number",
                value.trim()
            ))
        })?;
        values[idx] = Some(value);
    }
    Ok(values
        .iter()
        .zip(parameters)
        .map(|(v, p)| v.unwrap_or(p.default))
        .collect())
}
impl FromStr for OpticalComponent {
    type Err = OpticsError;

    /// Parse a component from its label, e.g. `FreeSpace(d = 2)` or `PlanarMirror`.
    ///
    /// Parameters which are not given are set to their default values.
    fn from_str(s: &str) -> OptResult<Self> {
        let text = s.trim();
        let (name, args) = split_label(text)?;
        let kind = ComponentKind::iter()
            .find(|k| k.to_string() == name)
            .ok_or_else(|| not_a_component(text))?;
        let values = parse_values(kind, args)?;
        kind.build(&values)
    }
}
