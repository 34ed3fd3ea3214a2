use super::*;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::modules::file_splitter::workbook::{read_first_sheet, write_xlsx, CellValue};

    fn options(mode: SplitMode, parts: usize) -> SplitOptions {
        SplitOptions {
            encoding: Encoding::Utf8,
            split_mode: mode,
            split_value: parts,
        }
    }

    #[test]
    fn test_text_file_by_lines() {
        let content = (1..=20).map(|i| format!("entry {i}")).collect::<Vec<_>>().join("\n");
        let splitter = FileSplitter::with_options(options(SplitMode::Lines, 4));
        let parts = splitter.split_file("app.log", content.as_bytes()).unwrap();

        assert_eq!(parts.len(), 4);
        for part in &parts {
            assert_eq!(part.metadata.unit_count, Some(5));
            assert_eq!(part.metadata.extension, "log");
        }
    }

    #[test]
    fn test_csv_with_ten_rows() {
        let mut csv = "sku,qty\n".to_string();
        for i in 0..10 {
            csv.push_str(&format!("SKU-{i},{}\n", i * 3));
        }

        let splitter = FileSplitter::with_options(options(SplitMode::Lines, 3));
        let parts = splitter.split_file("inventory.csv", csv.as_bytes()).unwrap();

        assert_eq!(parts.len(), 3);
        let total: usize = parts
            .iter()
            .map(|p| {
                let text = String::from_utf8_lossy(&p.data);
                let lines: Vec<&str> = text.split('\n').collect();
                assert_eq!(lines[0], "sku,qty");
                assert!(lines.len() - 1 <= 4);
                lines.len() - 1
            })
            .sum();
        assert_eq!(total, 10);
        assert_eq!(parts[0].file_name("inventory"), "inventory_part1.csv");
    }

    #[test]
    fn test_binary_scenario() {
        let data = vec![7u8; 100];
        let splitter = FileSplitter::with_options(options(SplitMode::Lines, 3));
        let parts = splitter.split_file("image.png", &data).unwrap();
        let sizes: Vec<usize> = parts.iter().map(|p| p.metadata.size_bytes).collect();
        assert_eq!(sizes, vec![34, 34, 32]);
    }

    #[test]
    fn test_empty_csv_produces_no_parts() {
        let splitter = FileSplitter::with_options(options(SplitMode::Lines, 3));
        let err = splitter.split_file("blank.csv", b"\n\n").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_spreadsheet_rows_conserved() {
        let mut rows = vec![vec![
            CellValue::Text("region".to_string()),
            CellValue::Text("revenue".to_string()),
        ]];
        for i in 0..7 {
            rows.push(vec![
                CellValue::Text(format!("R{i}")),
                CellValue::Number(1000.0 + i as f64),
            ]);
        }
        let workbook = write_xlsx(&rows).unwrap();

        let splitter = FileSplitter::with_options(options(SplitMode::Characters, 3));
        let parts = splitter.split_file("Q3 Report.XLSX", &workbook).unwrap();
        assert_eq!(parts.len(), 3);

        let mut seen = Vec::new();
        for part in &parts {
            let part_rows = read_first_sheet(&part.data).unwrap();
            assert_eq!(part_rows[0], rows[0]);
            seen.extend(part_rows.into_iter().skip(1));
        }
        assert_eq!(seen, rows[1..].to_vec());
        assert_eq!(parts[2].file_name("Q3 Report"), "Q3 Report_part3.xlsx");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn options(mode: SplitMode, parts: usize) -> SplitOptions {
        SplitOptions {
            encoding: Encoding::Utf8,
            split_mode: mode,
            split_value: parts,
        }
    }

    proptest! {
        #[test]
        fn binary_parts_reassemble(data in proptest::collection::vec(any::<u8>(), 0..2048), n in 2usize..16) {
            let splitter = FileSplitter::with_options(options(SplitMode::Lines, n));
            let parts = splitter.split_file("blob.bin", &data).unwrap();

            prop_assert_eq!(parts.len(), n);
            let max = ceil_div(data.len(), n);
            for part in &parts {
                prop_assert!(part.data.len() <= max);
            }
            let joined: Vec<u8> = parts.iter().flat_map(|p| p.data.clone()).collect();
            prop_assert_eq!(joined, data);
        }

        #[test]
        fn characters_reassemble(text in "\\PC{0,400}", n in 2usize..12) {
            let splitter = FileSplitter::with_options(options(SplitMode::Characters, n));
            let parts = splitter.split_file("doc.txt", text.as_bytes()).unwrap();

            prop_assert!(parts.len() <= n);
            let joined: String = parts
                .iter()
                .map(|p| String::from_utf8(p.data.clone()).unwrap())
                .collect();
            prop_assert_eq!(joined, text);
        }

        #[test]
        fn lines_reassemble(lines in proptest::collection::vec("[a-z ]{0,12}", 1..60), n in 2usize..10) {
            let text = lines.join("\n");
            let splitter = FileSplitter::with_options(options(SplitMode::Lines, n));
            let parts = splitter.split_file("doc.md", text.as_bytes()).unwrap();

            prop_assert!(parts.len() <= n);
            let rebuilt: Vec<String> = parts
                .iter()
                .flat_map(|p| {
                    String::from_utf8(p.data.clone())
                        .unwrap()
                        .split('\n')
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .collect();
            prop_assert_eq!(rebuilt, lines);
        }

        #[test]
        fn csv_headers_and_part_count(
            rows in proptest::collection::vec("[a-z0-9,]{0,10}", 0..50),
            n in 2usize..10,
        ) {
            let csv = format!("col_a,col_b\n{}", rows.join("\n"));
            let splitter = FileSplitter::with_options(options(SplitMode::Lines, n));
            let parts = splitter.split_file("rows.csv", csv.as_bytes()).unwrap();

            prop_assert_eq!(parts.len(), n);
            let expected: Vec<&str> = rows.iter().map(|r| r.trim()).filter(|r| !r.is_empty()).collect();
            let mut seen = Vec::new();
            for part in &parts {
                let text = String::from_utf8(part.data.clone()).unwrap();
                let mut lines = text.split('\n');
                prop_assert_eq!(lines.next(), Some("col_a,col_b"));
                for line in lines {
                    prop_assert!(!line.trim().is_empty());
                    seen.push(line.to_string());
                }
            }
            prop_assert_eq!(seen, expected);
        }
    }
}
