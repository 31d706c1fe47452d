use rs_resume_parser::extractor::{extract_address, extract_name, extract_skills};
use rs_resume_parser::{
    parse, parse_with_options, Options, DEFAULT_ADDRESS_KEYWORDS, DEFAULT_STOP_HEADERS,
};

#[test]
fn options_default_values_are_sensible() {
    let options = Options::default();
    assert_eq!(options.stop_headers.len(), DEFAULT_STOP_HEADERS.len());
    assert_eq!(options.address_keywords.len(), DEFAULT_ADDRESS_KEYWORDS.len());
    assert_eq!(options.address_scan_lines, 10);
    assert!(options.skills_blacklist.iter().any(|t| t == "city"));
    assert!(options.name_skip_keywords.iter().any(|t| t == "email"));
}

#[test]
fn options_struct_update_syntax_overrides_selected_fields_only() {
    let options = Options {
        address_scan_lines: 3,
        ..Options::default()
    };

    assert_eq!(options.address_scan_lines, 3);
    assert_eq!(options.stop_headers, Options::default().stop_headers);
}

#[test]
fn extra_stop_header_bounds_sections() {
    let text = "Skills:\nRust\nPublications:\nPaper";
    assert_eq!(
        extract_skills(text, &Options::default()),
        vec!["Rust", "Publications:", "Paper"]
    );

    let mut stop_headers = Options::default().stop_headers;
    stop_headers.push("Publications".to_string());
    let options = Options {
        stop_headers,
        ..Options::default()
    };
    assert_eq!(extract_skills(text, &options), vec!["Rust"]);
}

#[test]
fn empty_blacklist_keeps_every_skill() {
    let text = "Skills: Rust, Mission Street";
    let options = Options {
        skills_blacklist: Vec::new(),
        ..Options::default()
    };
    assert_eq!(extract_skills(text, &options), vec!["Rust", "Mission Street"]);
    assert_eq!(extract_skills(text, &Options::default()), vec!["Rust"]);
}

#[test]
fn address_scan_window_is_configurable() {
    let text = "Jane Doe\nSkills:\nRust\n12 Oak Street";
    assert_eq!(
        extract_address(text, &Options::default()).as_deref(),
        Some("12 Oak Street")
    );

    let narrow = Options {
        address_scan_lines: 2,
        ..Options::default()
    };
    assert_eq!(extract_address(text, &narrow), None);
}

#[test]
fn name_skip_keywords_are_configurable() {
    let text = "Curriculum Vitae\nJane Doe";
    assert_eq!(
        extract_name(text, &Options::default()).as_deref(),
        Some("Curriculum Vitae")
    );

    let mut name_skip_keywords = Options::default().name_skip_keywords;
    name_skip_keywords.push("curriculum".to_string());
    let options = Options {
        name_skip_keywords,
        ..Options::default()
    };
    assert_eq!(extract_name(text, &options).as_deref(), Some("Jane Doe"));
}

#[test]
fn parse_with_default_options_matches_parse() {
    let text = "Jane Doe\nSkills: Rust, Go\nEducation:\nBSc, MIT, 2020";
    assert_eq!(parse(text), parse_with_options(text, &Options::default()));
}
