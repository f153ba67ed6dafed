use fpmap_core::format::filename;

#[test]
fn model_and_resolution_from_generated_name() {
    let meta = filename::scan("80000331_1808x727.fpm");
    assert_eq!(meta.model, Some(0x8000_0331));
    assert_eq!(meta.width, Some(1808));
    assert_eq!(meta.height, Some(727));
}

#[test]
fn directory_components_are_ignored() {
    let meta = filename::scan("/maps/out/80000346_1872x1060.pbm");
    assert_eq!(meta.model, Some(0x8000_0346));
    assert_eq!(meta.width, Some(1872));
    assert_eq!(meta.height, Some(1060));
}

#[test]
fn pass_suffix_does_not_confuse_the_height_token() {
    let meta = filename::scan("80000331_1808x727.pass2.pbm");
    assert_eq!(meta.height, Some(727));
}

#[test]
fn untrusted_model_token_is_rejected() {
    // Neither '8' in position 0 nor '0' in position 1.
    let meta = filename::scan("focusmap_1808x727.fpm");
    assert_eq!(meta.model, None);
    assert_eq!(meta.width, Some(1808));
    assert_eq!(meta.height, Some(727));
}

#[test]
fn name_without_tokens_yields_nothing() {
    let meta = filename::scan("map.fpm");
    assert_eq!(meta.model, None);
    assert_eq!(meta.width, None);
    assert_eq!(meta.height, None);
}
