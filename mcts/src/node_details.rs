use std::fmt::{self, Debug, Display, Formatter};

pub struct NodeDetails {
    pub visits: usize,
    pub children: Vec<EdgeDetails>,
}

impl Display for NodeDetails {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let actions = format!(
            "[{}]",
            self.children
                .iter()
                .fold(String::new(), |acc, edge| acc + &format!("\n\t({}),", edge))
        );

        write!(
            f,
            "V: {visits}, Actions: {actions}",
            visits = self.visits,
            actions = actions
        )
    }
}

impl Debug for NodeDetails {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// Statistics of a single edge, with `value` expressed for the player choosing the edge.
#[derive(Clone, PartialEq)]
pub struct EdgeDetails {
    pub action: usize,
    pub visits: usize,
    pub value: f32,
    pub prior: f32,
    pub ucb: f32,
}

impl Display for EdgeDetails {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "A: {action}, N: {visits}, Q: {value:.3}, P: {prior:.3}, UCB: {ucb:.3}",
            action = self.action,
            visits = self.visits,
            value = self.value,
            prior = self.prior,
            ucb = self.ucb,
        )
    }
}

impl Debug for EdgeDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_details_display() {
        let details = NodeDetails {
            visits: 3,
            children: vec![EdgeDetails {
                action: 1,
                visits: 2,
                value: 0.5,
                prior: 0.25,
                ucb: 0.75,
            }],
        };

        assert_eq!(
            details.to_string(),
            "V: 3, Actions: [\n\t(A: 1, N: 2, Q: 0.500, P: 0.250, UCB: 0.750),]"
        );
    }
}
