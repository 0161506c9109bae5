use crate::{
    CharTypes, InputMethod, OptimizeMultilang, TelexConfig, TelexEngine, TelexState, Tone,
    classify, tone_of,
};

fn type_seq(engine: &mut TelexEngine, seq: &str) -> String {
    for c in seq.chars() {
        engine.push_char(c);
    }
    engine.peek()
}

fn telex() -> TelexEngine {
    TelexEngine::new(TelexConfig::default())
}

fn vni() -> TelexEngine {
    TelexEngine::new(TelexConfig::default().with_input_method(InputMethod::Vni))
}

fn type_telex(seq: &str) -> String {
    type_seq(&mut telex(), seq)
}

fn type_vni(seq: &str) -> String {
    type_seq(&mut vni(), seq)
}

fn commit_telex(seq: &str) -> (TelexState, String) {
    let mut e = telex();
    type_seq(&mut e, seq);
    let state = e.commit();
    (state, e.retrieve())
}

fn commit_vni(seq: &str) -> (TelexState, String) {
    let mut e = vni();
    type_seq(&mut e, seq);
    let state = e.commit();
    (state, e.retrieve())
}

fn backspaces(e: &mut TelexEngine, expected: &[&str]) {
    for want in expected {
        e.backspace();
        assert_eq!(e.peek(), *want);
    }
}

#[test]
fn telex_modifier_basic() {
    assert_eq!(type_telex("aa"), "â");
    assert_eq!(type_telex("aw"), "ă");
    assert_eq!(type_telex("ee"), "ê");
    assert_eq!(type_telex("oo"), "ô");
    assert_eq!(type_telex("ow"), "ơ");
    assert_eq!(type_telex("uw"), "ư");
    assert_eq!(type_telex("dd"), "đ");
}

#[test]
fn tone_single_vowel_all_tones() {
    assert_eq!(type_telex("as"), "á");
    assert_eq!(type_telex("af"), "à");
    assert_eq!(type_telex("ar"), "ả");
    assert_eq!(type_telex("ax"), "ã");
    assert_eq!(type_telex("aj"), "ạ");
}

#[test]
fn z_key_removes_tone() {
    let mut e = telex();
    assert_eq!(type_seq(&mut e, "asz"), "a");
    assert_eq!(e.get_tone(), Tone::Level);
    assert_eq!(e.get_state(), TelexState::Valid);
}

#[test]
fn retyped_tone_undoes() {
    let mut e = telex();
    assert_eq!(type_seq(&mut e, "ass"), "as");
    assert_eq!(e.get_state(), TelexState::Invalid);
    assert_eq!(e.count(), 3);
    assert_eq!(e.retrieve_raw(), "as");
}

#[test]
fn retyped_modifier_undoes() {
    assert_eq!(type_telex("aaa"), "aa");
    assert_eq!(type_telex("aww"), "aw");
    assert_eq!(type_telex("ddd"), "dd");
}

#[test]
fn commits_common_words() {
    assert_eq!(commit_telex("ddoongf"), (TelexState::Committed, "đồng".to_string()));
    assert_eq!(commit_telex("aans"), (TelexState::Committed, "ấn".to_string()));
    assert_eq!(commit_telex("huowng"), (TelexState::Committed, "hương".to_string()));
    assert_eq!(commit_telex("dduwowcj"), (TelexState::Committed, "được".to_string()));
    assert_eq!(commit_telex("nghieengx"), (TelexState::Committed, "nghiễng".to_string()));
    assert_eq!(commit_telex("quaays"), (TelexState::Committed, "quấy".to_string()));
}

#[test]
fn separate_dd() {
    assert_eq!(commit_telex("dads"), (TelexState::Committed, "đá".to_string()));

    let config = TelexConfig {
        accept_separate_dd: false,
        ..TelexConfig::default()
    };
    let mut e = TelexEngine::new(config);
    assert_eq!(type_seq(&mut e, "dad"), "dad");
    assert_eq!(e.commit(), TelexState::CommittedInvalid);
}

#[test]
fn horn_spreads_over_uo() {
    assert_eq!(type_telex("uwow"), "ươ");
    assert_eq!(type_telex("muwa"), "mưa");
    assert_eq!(type_telex("muaw"), "mưa");
}

#[test]
fn double_o_keeps_both_vowels() {
    let mut e = telex();
    assert_eq!(type_seq(&mut e, "xooong"), "xoong");
    assert_eq!(e.commit(), TelexState::Committed);
    assert_eq!(e.retrieve(), "xoong");
}

#[test]
fn english_words_rejected() {
    let mut e = telex();
    type_seq(&mut e, "system");
    assert_eq!(e.commit(), TelexState::CommittedInvalid);
    assert_eq!(e.retrieve_raw(), "system");
    assert_eq!(e.retrieve(), "system");

    assert_eq!(commit_telex("virus"), (TelexState::CommittedInvalid, "virus".to_string()));
}

#[test]
fn multilang_levels() {
    let off = TelexConfig {
        optimize_multilang: OptimizeMultilang::Off,
        ..TelexConfig::default()
    };
    let mut e = TelexEngine::new(off);
    type_seq(&mut e, "virus");
    assert_eq!(e.commit(), TelexState::Committed);
    assert_eq!(e.retrieve(), "víu");

    assert_eq!(commit_telex("bias"), (TelexState::Committed, "bía".to_string()));
    let aggressive = TelexConfig {
        optimize_multilang: OptimizeMultilang::Aggressive,
        ..TelexConfig::default()
    };
    let mut e = TelexEngine::new(aggressive);
    type_seq(&mut e, "bias");
    assert_eq!(e.commit(), TelexState::CommittedInvalid);

    assert_eq!(type_telex("asf"), "à");
    let strict = TelexConfig {
        optimize_multilang: OptimizeMultilang::Strict,
        ..TelexConfig::default()
    };
    let mut e = TelexEngine::new(strict);
    assert_eq!(type_seq(&mut e, "asf"), "asf");
    assert_eq!(e.get_state(), TelexState::Invalid);
}

#[test]
fn bare_consonant_commits_invalid() {
    let mut e = telex();
    type_seq(&mut e, "z");
    assert_eq!(e.commit(), TelexState::CommittedInvalid);
    assert_eq!(e.retrieve_raw(), "z");
}

#[test]
fn stop_coda_restricts_tone() {
    let mut e = telex();
    assert_eq!(type_seq(&mut e, "afc"), "afc");
    assert_eq!(e.get_state(), TelexState::Invalid);

    let mut e = telex();
    assert_eq!(type_seq(&mut e, "acf"), "àc");
    assert_eq!(e.commit(), TelexState::CommittedInvalid);
    assert_eq!(e.retrieve_raw(), "acf");
}

#[test]
fn nucleus_coda_requirements() {
    assert_eq!(commit_telex("aw").0, TelexState::CommittedInvalid);
    assert_eq!(commit_telex("aim").0, TelexState::CommittedInvalid);
    assert_eq!(commit_telex("awm"), (TelexState::Committed, "ăm".to_string()));
}

#[test]
fn force_commit_skips_validation() {
    let mut e = telex();
    type_seq(&mut e, "aw");
    assert_eq!(e.force_commit(), TelexState::Committed);
    assert_eq!(e.retrieve(), "ă");

    let mut e = telex();
    type_seq(&mut e, "bl");
    assert_eq!(e.force_commit(), TelexState::CommittedInvalid);
    assert_eq!(e.retrieve(), "bl");
}

#[test]
fn gi_borrows_vowel() {
    assert_eq!(commit_vni("gi2"), (TelexState::Committed, "gì".to_string()));
    assert_eq!(commit_vni("gin2"), (TelexState::Committed, "gìn".to_string()));
    assert_eq!(commit_telex("gif"), (TelexState::Committed, "gì".to_string()));
    assert_eq!(commit_telex("gi"), (TelexState::Committed, "gi".to_string()));
    assert_eq!(type_vni("gio72"), "giờ");
    assert_eq!(type_vni("giu7a4"), "giữa");
}

#[test]
fn empty_engine() {
    let mut e = telex();
    assert_eq!(e.peek(), "");
    assert_eq!(e.retrieve(), "");
    assert_eq!(e.retrieve_raw(), "");
    assert_eq!(e.count(), 0);
    assert_eq!(e.backspace(), TelexState::Valid);
    assert_eq!(e.commit(), TelexState::Committed);
    assert_eq!(e.retrieve(), "");

    let mut e = telex();
    assert_eq!(e.cancel(), TelexState::CommittedInvalid);
    assert_eq!(e.retrieve_raw(), "");
}

#[test]
fn commit_is_idempotent() {
    let mut e = telex();
    type_seq(&mut e, "aans");
    assert_eq!(e.commit(), TelexState::Committed);
    assert_eq!(e.commit(), TelexState::Committed);
    assert_eq!(e.retrieve(), "ấn");
    assert_eq!(e.peek(), "ấn");
    assert_eq!(e.cancel(), TelexState::Committed);
}

#[test]
fn committed_engine_rejects_edits() {
    let mut e = telex();
    type_seq(&mut e, "as");
    e.commit();
    assert_eq!(e.push_char('a'), TelexState::TxError);
    assert_eq!(e.backspace(), TelexState::TxError);
    assert_eq!(e.backconvert("a"), TelexState::TxError);
    assert_eq!(e.get_state(), TelexState::Committed);
    assert_eq!(e.retrieve(), "á");
}

#[test]
fn reset_from_any_state() {
    let mut e = telex();
    type_seq(&mut e, "system");
    e.commit();
    e.reset();
    assert_eq!(e.get_state(), TelexState::Valid);
    assert_eq!(e.peek(), "");
    assert_eq!(e.count(), 0);
    assert_eq!(type_seq(&mut e, "vieetj"), "việt");
}

#[test]
fn long_words_go_invalid() {
    let mut e = telex();
    assert_eq!(type_seq(&mut e, "nghieengx"), "nghiễng");
    assert_eq!(e.push_char('s'), TelexState::Invalid);
    assert_eq!(e.peek(), "nghieengxs");
}

#[test]
fn uppercase_keeps_case() {
    assert_eq!(type_telex("DDoongf"), "Đồng");
    assert_eq!(type_telex("VIEETJ"), "VIỆT");
    assert_eq!(type_vni("NGUOI72"), "NGƯỜI");
}

#[test]
fn backspace_walks_back() {
    let mut e = telex();
    assert_eq!(type_seq(&mut e, "ddoongf"), "đồng");
    backspaces(&mut e, &["đồn", "đồ", "đ", ""]);
    assert_eq!(e.get_state(), TelexState::Valid);

    let mut e = telex();
    assert_eq!(type_seq(&mut e, "huowng"), "hương");
    backspaces(&mut e, &["hươn", "huơ", "hu", "h", ""]);

    let mut e = telex();
    assert_eq!(type_seq(&mut e, "nghieengx"), "nghiễng");
    backspaces(&mut e, &["nghiễn", "nghiễ", "nghi", "ngh", "ng", "n", ""]);
}

#[test]
fn backspace_reopens_transitions() {
    let mut e = telex();
    assert_eq!(type_seq(&mut e, "xooong"), "xoong");
    backspaces(&mut e, &["xoon", "xoo", "xo"]);

    let mut e = telex();
    assert_eq!(type_seq(&mut e, "muaw"), "mưa");
    backspaces(&mut e, &["mư", "m"]);

    let mut e = telex();
    assert_eq!(type_seq(&mut e, "dads"), "đá");
    backspaces(&mut e, &["đ", ""]);
}

#[test]
fn backspace_moves_tone_with_nucleus() {
    let mut e = vni();
    assert_eq!(type_seq(&mut e, "cuoc71"), "cước");
    backspaces(&mut e, &["cuớ", "cu"]);

    let mut e = vni();
    assert_eq!(type_seq(&mut e, "cu71oc"), "cước");
    backspaces(&mut e, &["cướ", "cư"]);

    let mut e = vni();
    assert_eq!(type_seq(&mut e, "hie62"), "hiề");
    backspaces(&mut e, &["hi"]);

    let mut e = vni();
    assert_eq!(type_seq(&mut e, "quy1"), "quý");
    backspaces(&mut e, &["qu"]);
}

#[test]
fn backspace_unknown_nucleus_with_tone() {
    let mut e = telex();
    assert_eq!(type_seq(&mut e, "ues"), "ué");
    backspaces(&mut e, &["ue"]);
    assert_eq!(e.get_state(), TelexState::Valid);
}

#[test]
fn backspace_out_of_invalid() {
    let mut e = vni();
    assert_eq!(type_seq(&mut e, "le66n"), "le6n");
    assert_eq!(e.backspace(), TelexState::Invalid);
    assert_eq!(e.peek(), "le6");

    let mut e = vni();
    assert_eq!(type_seq(&mut e, "mo66"), "mo6");
    assert_eq!(e.backspace(), TelexState::Invalid);
    assert_eq!(e.peek(), "mo");

    let config = TelexConfig {
        input_method: InputMethod::Vni,
        backspace_keeps_invalid: false,
        ..TelexConfig::default()
    };
    let mut e = TelexEngine::new(config);
    assert_eq!(type_seq(&mut e, "le66n"), "le6n");
    assert_eq!(e.backspace(), TelexState::Valid);
    assert_eq!(e.peek(), "lê");
}

#[test]
fn vni_words() {
    assert_eq!(commit_vni("d9o6ng2"), (TelexState::Committed, "đồng".to_string()));
    assert_eq!(commit_vni("a6n1"), (TelexState::Committed, "ấn".to_string()));
    assert_eq!(commit_vni("d9a1"), (TelexState::Committed, "đá".to_string()));
    assert_eq!(commit_vni("d9u7o7c5"), (TelexState::Committed, "được".to_string()));
    assert_eq!(commit_vni("ngu7o7i2"), (TelexState::Committed, "người".to_string()));
    assert_eq!(commit_vni("thue61"), (TelexState::Committed, "thuế".to_string()));
    assert_eq!(commit_vni("d9a8k1"), (TelexState::Committed, "đắk".to_string()));
    assert_eq!(type_vni("lau63"), "lẩu");
    assert_eq!(type_vni("huou7"), "hươu");
    assert_eq!(type_vni("ruo7i"), "rươi");
    assert_eq!(type_vni("dan9"), "đan");
}

#[test]
fn vni_after_q() {
    assert_eq!(commit_vni("quo7n1"), (TelexState::Committed, "quớn".to_string()));
    assert_eq!(commit_vni("qua8m1"), (TelexState::Committed, "quắm".to_string()));
    assert_eq!(type_vni("quon74"), "quỡn");
    assert_eq!(type_vni("que6"), "quê");
}

#[test]
fn vni_invalid_shows_keys() {
    assert_eq!(type_vni("xua66n"), "xua6n");
    assert_eq!(type_vni("to66l"), "to6l");
    assert_eq!(type_vni("d99"), "d9");
    assert_eq!(type_vni("ca3c"), "ca3c");
    assert_eq!(type_vni("cace"), "cace");
    assert_eq!(type_vni("ad"), "ad");
}

#[test]
fn oa_uy_placement() {
    assert_eq!(type_vni("toan2"), "toàn");
    assert_eq!(type_vni("hoa2"), "hoà");
    assert_eq!(type_vni("luy5"), "luỵ");

    let old_style = TelexConfig {
        input_method: InputMethod::Vni,
        oa_uy_tone1: true,
        ..TelexConfig::default()
    };
    assert_eq!(type_seq(&mut TelexEngine::new(old_style), "hoa2"), "hòa");
    assert_eq!(type_seq(&mut TelexEngine::new(old_style), "luy5"), "lụy");
    assert_eq!(type_seq(&mut TelexEngine::new(old_style), "toan2"), "toàn");
}

#[test]
fn backconvert_then_backspace() {
    let mut e = telex();
    assert_eq!(e.backconvert("đồng"), TelexState::Valid);
    assert_eq!(e.peek(), "đồng");
    backspaces(&mut e, &["đồn", "đồ", "đ", ""]);
}

#[test]
fn backconvert_keeps_case() {
    let mut e = vni();
    assert_eq!(e.backconvert("THẾ"), TelexState::Valid);
    assert_eq!(e.peek(), "THẾ");
}

#[test]
fn backconvert_doubled_vowels() {
    let mut e = telex();
    assert_eq!(e.backconvert("thoòng"), TelexState::Valid);
    assert_eq!(e.peek(), "thoòng");

    let mut e = vni();
    assert_eq!(e.backconvert("thoòng"), TelexState::Valid);
    assert_eq!(e.peek(), "thoòng");
    backspaces(&mut e, &["thoòn"]);
}

#[test]
fn backconvert_failure_recovers() {
    let mut e = vni();
    assert_eq!(e.backconvert("đồn7"), TelexState::BackconvertFailed);
    assert_eq!(e.peek(), "đồn7");
    assert_eq!(e.backspace(), TelexState::Valid);
    assert_eq!(e.peek(), "đồn");
    assert_eq!(e.cancel(), TelexState::BackconvertFailed);
    assert_eq!(e.peek(), "đồn");
    assert_eq!(e.retrieve(), "đồn");

    let mut e = telex();
    assert_eq!(e.backconvert("xoông"), TelexState::BackconvertFailed);
    assert_eq!(e.backspace(), TelexState::BackconvertFailed);
    assert_eq!(e.peek(), "xoôn");
    assert_eq!(e.backspace(), TelexState::BackconvertFailed);
    assert_eq!(e.peek(), "xoô");
    assert_eq!(e.backspace(), TelexState::Valid);
    assert_eq!(e.peek(), "xo");
}

#[test]
fn backconvert_round_trip() {
    for word in ["caays", "quaays", "ddoongf", "huowng", "nghieengx"] {
        let (state, text) = commit_telex(word);
        assert_eq!(state, TelexState::Committed, "{word}");
        let mut e = telex();
        assert_eq!(e.backconvert(&text), TelexState::Valid, "{word}");
        assert_eq!(e.peek(), text);
        assert_eq!(e.commit(), TelexState::Committed);
        assert_eq!(e.retrieve(), text);
    }
}

/// Backspaces until the engine is empty, checking it stays valid, and
/// returns what was shown after each step.
fn backspace_trail(e: &mut TelexEngine, word: &str) -> Vec<String> {
    let mut trail = Vec::new();
    for _ in 0..16 {
        if e.count() == 0 {
            break;
        }
        assert_eq!(e.backspace(), TelexState::Valid, "{word} after {trail:?}");
        trail.push(e.peek());
    }
    assert_eq!(e.count(), 0, "{word}");
    trail
}

#[test]
fn backspace_clears_tone_reset_keys() {
    let mut e = telex();
    assert_eq!(type_seq(&mut e, "tafnz"), "tan");
    assert_eq!(e.backspace(), TelexState::Valid);
    assert_eq!(e.peek(), "ta");

    let mut e = telex();
    assert_eq!(type_seq(&mut e, "afzd"), "ad");
    assert_eq!(e.backspace(), TelexState::Valid);
    assert_eq!(e.peek(), "a");

    let mut e = vni();
    assert_eq!(type_seq(&mut e, "a206h"), "âh");
    assert_eq!(e.backspace(), TelexState::Valid);
    assert_eq!(e.peek(), "â");
}

#[test]
fn backspace_from_valid_stays_valid() {
    let telex_words = [
        "ddoongf", "huowng", "nghieengx", "xooong", "dads", "muaw", "uwow", "awm", "quaays",
        "caays", "vieetj", "dduwowcj", "gif", "gin", "asz", "tafnz", "afnz", "adfz", "afoz",
        "afzd",
    ];
    for word in telex_words {
        let mut e = telex();
        type_seq(&mut e, word);
        assert_eq!(e.get_state(), TelexState::Valid, "{word}");
        backspace_trail(&mut e, word);
    }

    let vni_words = [
        "cuoc71", "cu71oc", "hie62", "quy1", "huo7ng", "a206h", "d9o6ng2", "gi2", "gio72",
        "quo7n1",
    ];
    for word in vni_words {
        let mut e = vni();
        type_seq(&mut e, word);
        assert_eq!(e.get_state(), TelexState::Valid, "{word}");
        backspace_trail(&mut e, word);
    }
}

#[test]
fn backconverted_word_backspaces_like_typed() {
    for word in ["ddoongf", "nghieengx", "caays", "quaays", "xooong", "vieetj", "dads"] {
        let mut typed = telex();
        type_seq(&mut typed, word);
        let text = typed.peek();

        let mut rebuilt = telex();
        assert_eq!(rebuilt.backconvert(&text), TelexState::Valid, "{word}");
        assert_eq!(rebuilt.peek(), text);

        let forward = backspace_trail(&mut typed, word);
        assert_eq!(backspace_trail(&mut rebuilt, &text), forward, "{word}");
    }
}

#[test]
fn accepts_and_classifies() {
    let e = telex();
    assert!(e.accepts_char('a'));
    assert!(e.accepts_char('W'));
    assert!(!e.accepts_char('1'));
    assert!(!e.accepts_char(' '));
    assert!(!e.accepts_char('['));

    let e = vni();
    assert!(e.accepts_char('1'));
    assert!(e.accepts_char('9'));
    assert!(!e.accepts_char('.'));

    let r = classify('r', InputMethod::Telex);
    assert!(r.contains(CharTypes::TONE | CharTypes::CONSO_CONTINUE));
    assert_eq!(classify('[', InputMethod::Telex), CharTypes::SHORTHAND);
    assert_eq!(classify(' ', InputMethod::Telex), CharTypes::COMMIT);
    assert_eq!(classify('\0', InputMethod::Vni), CharTypes::FORCE_COMMIT);
    assert_eq!(classify('\u{8}', InputMethod::Vni), CharTypes::BACKSPACE);
    assert!(classify('ă', InputMethod::Telex).is_empty());
    assert_eq!(tone_of('S', InputMethod::Telex), Tone::Sharp);
    assert_eq!(tone_of('5', InputMethod::Vni), Tone::Heavy);
    assert_eq!(tone_of('b', InputMethod::Telex), Tone::Level);
}

#[test]
fn config_switch_between_words() {
    let mut e = telex();
    assert_eq!(type_seq(&mut e, "as"), "á");
    e.reset();
    e.set_config(e.get_config().with_input_method(InputMethod::Vni));
    assert_eq!(type_seq(&mut e, "a1"), "á");
    assert_eq!(e.get_config().input_method, InputMethod::Vni);
}

#[test]
fn config_from_toml() {
    let config: TelexConfig = toml::from_str(
        r#"
            input_method = "vni"
            oa_uy_tone1 = true
            optimize_multilang = "aggressive"
        "#,
    )
    .unwrap();
    assert_eq!(config.input_method, InputMethod::Vni);
    assert!(config.oa_uy_tone1);
    assert!(config.accept_separate_dd);
    assert!(config.backspace_keeps_invalid);
    assert_eq!(config.optimize_multilang, OptimizeMultilang::Aggressive);
    assert!(config.optimize_multilang > OptimizeMultilang::On);

    let empty: TelexConfig = toml::from_str("").unwrap();
    assert_eq!(empty, TelexConfig::default());
    let text = toml::to_string(&empty).unwrap();
    assert!(text.contains("input_method = \"telex\""));
}
