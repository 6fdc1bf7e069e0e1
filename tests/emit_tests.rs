use atsp2tsp::{convert_str, structure::parse_atsp, TspInstance};

#[test]
fn two_node_output() {
    let src = "NAME: test\nDIMENSION: 2\nEDGE_WEIGHT_SECTION\n0 5\n7 0\nEOF\n";

    let out = convert_str(src).unwrap();

    let expected = "\
NAME: test
TYPE: TSP
COMMENT: Converted from ATSP
DIMENSION: 4
EDGE_WEIGHT_TYPE: EXPLICIT
EDGE_WEIGHT_FORMAT: FULL_MATRIX
EDGE_WEIGHT_SECTION
    7     7     0     5
    7     7     7     0
    0     7     7     7
    5     0     7     7
FIXED_EDGES_SECTION
1 3
2 4
-1
EOF
";
    similar_asserts::assert_eq!(out.as_str(), expected);
}

#[test]
fn forced_header_values() {
    let src = "TYPE: ATSP\nCOMMENT: original\nEDGE_WEIGHT_TYPE: EXPLICIT\n\
               EDGE_WEIGHT_FORMAT: FULL_MATRIX\nDIMENSION: 1\nEDGE_WEIGHT_SECTION\n0\nEOF\n";

    let out = convert_str(src).unwrap();
    let lines = out.lines().collect::<Vec<_>>();

    assert_eq!(
        lines[..7],
        [
            "NAME: converted",
            "TYPE: TSP",
            "COMMENT: Converted from ATSP",
            "DIMENSION: 2",
            "EDGE_WEIGHT_TYPE: EXPLICIT",
            "EDGE_WEIGHT_FORMAT: FULL_MATRIX",
            "EDGE_WEIGHT_SECTION",
        ]
    );
    assert_eq!(lines[7..], ["    0     0", "    0     0", "FIXED_EDGES_SECTION", "1 2", "-1", "EOF"]);
}

#[test]
fn wide_and_negative_weights() {
    let src = "NAME: wide\nDIMENSION: 2\nEDGE_WEIGHT_SECTION\n0 123456\n-3 0\nEOF\n";

    let out = convert_str(src).unwrap();
    let rows = out
        .lines()
        .skip_while(|l| *l != "EDGE_WEIGHT_SECTION")
        .skip(1)
        .take(4)
        .collect::<Vec<_>>();

    assert_eq!(rows[0], "123456 123456     0 123456");
    assert_eq!(rows[3], "123456     0 123456 123456");
    assert_eq!(rows[2], "    0    -3 123456 123456");
}

#[test]
fn fixed_edge_section() {
    let weights = (0..9).map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
    let src = format!("NAME: three\nDIMENSION: 3\nEDGE_WEIGHT_SECTION\n{weights}\nEOF\n");

    let instance = TspInstance::new(&parse_atsp(&src).unwrap());
    let out = instance.to_tsp();
    let fixed = out
        .lines()
        .skip_while(|l| *l != "FIXED_EDGES_SECTION")
        .skip(1)
        .collect::<Vec<_>>();

    assert_eq!(instance.name(), "three");
    assert_eq!(instance.fixed_edges().len(), 3);
    assert_eq!(fixed, ["1 4", "2 5", "3 6", "-1", "EOF"]);
}

#[test]
fn output_is_deterministic() {
    let src = "NAME: d\nDIMENSION: 2\nEDGE_WEIGHT_SECTION\n0 1\n2 0\nEOF\n";

    assert_eq!(convert_str(src).unwrap(), convert_str(src).unwrap());
}
