pub const INCOMPLETE_NOTICE: &str = "Please complete all previous steps before reviewing.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    Complete {
        sentence: String,
        record_types: Vec<String>,
    },
    Incomplete {
        notice: String,
    },
}

impl Summary {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }
}

/// Joins items in natural language with an Oxford comma.
pub fn format_list<S: AsRef<str>>(items: &[S], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} {conjunction} {}", first.as_ref(), second.as_ref()),
        [head @ .., last] => {
            let head = head
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{head}, {conjunction} {}", last.as_ref())
        }
    }
}

/// Callers pass selections read right before formatting.
pub fn build_summary(record_types: &[String], triggers: &[String], actions: &[String]) -> Summary {
    if record_types.is_empty() || triggers.is_empty() || actions.is_empty() {
        return Summary::Incomplete {
            notice: INCOMPLETE_NOTICE.to_string(),
        };
    }

    let trigger_text = format_list(triggers, "or");
    let action_text = format_list(actions, "and");
    Summary::Complete {
        sentence: format!(
            "When any of the following record types is {trigger_text}, {action_text}."
        ),
        record_types: record_types.to_vec(),
    }
}
