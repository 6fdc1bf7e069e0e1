use crate::{
    matrix::{fixed_edges, FixedEdge, SymmetricMatrix},
    structure::{AtspFile, WEIGHT_SECTION},
};

const DEFAULT_NAME: &str = "converted";
const WEIGHT_WIDTH: usize = 5;

/// A symmetric instance ready to be handed to a TSP solver.
pub struct TspInstance {
    name: String,
    matrix: SymmetricMatrix,
    fixed_edges: Vec<FixedEdge>,
}

impl TspInstance {
    pub fn new(atsp: &AtspFile) -> Self {
        Self {
            name: atsp.header.name().unwrap_or(DEFAULT_NAME).to_string(),
            matrix: atsp.matrix.double(),
            fixed_edges: fixed_edges(atsp.dimension()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matrix(&self) -> &SymmetricMatrix {
        &self.matrix
    }

    pub fn fixed_edges(&self) -> &[FixedEdge] {
        &self.fixed_edges
    }

    pub fn to_tsp(&self) -> String {
        let mut tsp = String::new();
        tsp.push_str(&format!("NAME: {}\n", self.name));
        tsp.push_str("TYPE: TSP\n");
        tsp.push_str("COMMENT: Converted from ATSP\n");
        tsp.push_str(&format!("DIMENSION: {}\n", self.matrix.dimension()));
        tsp.push_str("EDGE_WEIGHT_TYPE: EXPLICIT\n");
        tsp.push_str("EDGE_WEIGHT_FORMAT: FULL_MATRIX\n");
        tsp.push_str(&format!("{}\n", WEIGHT_SECTION));

        for row in self.matrix.rows() {
            let row = row
                .iter()
                .map(|v| format!("{:>width$}", v, width = WEIGHT_WIDTH))
                .collect::<Vec<_>>()
                .join(" ");
            tsp.push_str(&row);
            tsp.push('\n');
        }

        tsp.push_str("FIXED_EDGES_SECTION\n");
        for FixedEdge(a, b) in &self.fixed_edges {
            tsp.push_str(&format!("{} {}\n", a, b));
        }
        tsp.push_str("-1\n");
        tsp.push_str("EOF\n");
        tsp
    }
}
