use tdoa_rom::TdoaTable;
use tdoa_rom::config::TdoaConfig;
use tdoa_rom::output::{CsvFormatter, JsonFormatter, VerilogFormatter, render};

const GOLDEN: &str = concat!(
    "3'd0: begin exp_AB =  -3; exp_AC =   3; end // N \n",
    "3'd1: begin exp_AB =   6; exp_AC =  16; end // NE\n",
    "3'd2: begin exp_AB =  12; exp_AC =  19; end // E \n",
    "3'd3: begin exp_AB =  12; exp_AC =  11; end // SE\n",
    "3'd4: begin exp_AB =   6; exp_AC =  -2; end // S \n",
    "3'd5: begin exp_AB =  -5; exp_AC = -15; end // SW\n",
    "3'd6: begin exp_AB = -12; exp_AC = -19; end // W \n",
    "3'd7: begin exp_AB = -11; exp_AC = -12; end // NW\n",
);

fn render_default() -> String {
    let table = TdoaTable::generate(&TdoaConfig::default()).expect("default config is valid");
    render(&table, &VerilogFormatter).expect("verilog rendering cannot fail")
}

#[test]
fn test_golden_verilog_output() {
    assert_eq!(render_default(), GOLDEN);
}

#[test]
fn test_exactly_eight_lines() {
    let text = render_default();
    assert_eq!(text.lines().count(), 8);
    assert!(text.ends_with('\n'));
    for (i, line) in text.lines().enumerate() {
        assert!(
            line.starts_with(&format!("3'd{}: begin exp_AB = ", i)),
            "line {} malformed: {:?}",
            i,
            line
        );
    }
}

#[test]
fn test_single_letter_labels_keep_trailing_space() {
    let text = render_default();
    let lines: Vec<&str> = text.lines().collect();
    for i in [0, 2, 4, 6] {
        assert!(lines[i].ends_with(' '), "line {} lost its trailing space", i);
    }
    for i in [1, 3, 5, 7] {
        assert!(!lines[i].ends_with(' '));
    }
}

#[test]
fn test_output_is_deterministic() {
    assert_eq!(render_default(), render_default());
}

#[test]
fn test_csv_output_shape() {
    let table = TdoaTable::generate(&TdoaConfig::default()).unwrap();
    let text = render(&table, &CsvFormatter).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert!(lines[0].starts_with("index,label"));
    assert!(lines[1].starts_with("0,N,90,"));
    assert!(lines[1].ends_with(",-3,3"));
    assert!(lines[8].ends_with(",-11,-12"));
}

#[test]
fn test_json_output_matches_table() {
    let table = TdoaTable::generate(&TdoaConfig::default()).unwrap();
    let text = render(&table, &JsonFormatter).unwrap();
    let rows: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(rows.len(), 8);
    for (row, (ab, ac)) in rows.iter().zip(table.offsets()) {
        assert_eq!(row["exp_ab"], ab);
        assert_eq!(row["exp_ac"], ac);
    }
    assert_eq!(rows[5]["label"], "SW");
}
