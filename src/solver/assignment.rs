use indexmap::IndexMap;

/// Total truth assignment over variables `1..=num_vars`. Only variables that
/// occur in a clause are stored; every other variable in range reads `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    values: IndexMap<u32, bool>,
    num_vars: u32,
}

impl Assignment {
    pub(crate) fn new(values: IndexMap<u32, bool>, num_vars: u32) -> Self {
        Self { values, num_vars }
    }

    /// Dense model with slot 0 unused.
    pub fn from_model(model: Vec<bool>) -> Self {
        let values = model
            .iter()
            .enumerate()
            .skip(1)
            .filter(|&(_, &value)| value)
            .map(|(var, &value)| (var as u32, value))
            .collect();
        Self {
            values,
            num_vars: model.len().saturating_sub(1) as u32,
        }
    }

    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    pub fn value(&self, var: u32) -> Option<bool> {
        if var == 0 || var > self.num_vars {
            return None;
        }
        Some(self.values.get(&var).copied().unwrap_or(false))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, bool)> + '_ {
        (1..=self.num_vars).map(move |var| (var, self.values.get(&var).copied().unwrap_or(false)))
    }

    /// `1`/`0` tokens for variables `1..=upto`; variables past the model print `0`.
    pub fn to_bits(&self, upto: u32) -> String {
        (1..=upto)
            .map(|var| if self.value(var).unwrap_or(false) { "1" } else { "0" })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
