// src/config/targets.rs
//
// CASP14 targets with published LGA summaries (domains and whole chains).

pub const CASP14_TARGETS: &[&str] = &[
    "T1024-D1", "T1024-D2", "T1024", "T1025-D1", "T1026-D1", "T1027-D1",
    "T1028-D1", "T1029-D1", "T1030-D1", "T1030-D2", "T1030", "T1031-D1",
    "T1032-D1", "T1033-D1", "T1034-D1", "T1035-D1", "T1036s1-D1", "T1037-D1",
    "T1038-D1", "T1038-D2", "T1038", "T1039-D1", "T1040-D1", "T1041-D1",
    "T1042-D1", "T1043-D1", "T1045s1-D1", "T1045s2-D1", "T1046s1-D1", "T1046s2-D1",
    "T1047s1-D1", "T1047s2-D1", "T1047s2-D2", "T1047s2-D3", "T1047s2", "T1048",
    "T1049-D1", "T1050-D1", "T1050-D2", "T1050-D3", "T1050", "T1052-D1",
    "T1052-D2", "T1052-D3", "T1052", "T1053-D1", "T1053-D2", "T1053",
    "T1054-D1", "T1054", "T1055-D1", "T1056-D1", "T1057-D1", "T1058-D1",
    "T1058-D2", "T1058", "T1060s2-D1", "T1060s3-D1", "T1061-D1", "T1061-D2",
    "T1061-D3", "T1061", "T1062", "T1064-D1", "T1065s1-D1", "T1065s2-D1",
    "T1067-D1", "T1068-D1", "T1070-D1", "T1070-D2", "T1070-D3", "T1070-D4",
    "T1070", "T1072s1", "T1073-D1", "T1074-D1", "T1076-D1", "T1078-D1",
    "T1079-D1", "T1080-D1", "T1082-D1", "T1083-D1", "T1084-D1", "T1085-D1",
    "T1085-D2", "T1085-D3", "T1085", "T1086-D1", "T1086-D2", "T1086",
    "T1087-D1", "T1088-D1", "T1089-D1", "T1090-D1", "T1091-D1", "T1091-D2",
    "T1091-D3", "T1091-D4", "T1091", "T1092-D1", "T1092-D2", "T1092",
    "T1093-D1", "T1093-D2", "T1093-D3", "T1093", "T1094-D1", "T1094-D2",
    "T1094", "T1095-D1", "T1095", "T1096-D1", "T1096-D2", "T1096",
    "T1098-D1", "T1098-D2", "T1098", "T1099-D1", "T1100-D1", "T1100-D2",
    "T1100", "T1101-D1", "T1101-D2", "T1101", "T1104-D1",
];

/// Owned copy of the default target list.
pub fn default_targets() -> Vec<String> {
    CASP14_TARGETS.iter().map(|t| s!(*t)).collect()
}

/// Parse a comma-separated target list, dropping blanks and keeping order.
/// Duplicates are kept out; the first occurrence wins.
pub fn parse_target_list(s: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if !out.iter().any(|t| t == part) {
            out.push(s!(part));
        }
    }
    out
}
