// Browser smoke test: mounts the scene and pokes it through the DOM.
// Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn mounts_and_opens_dialog_on_click() {
    space_cat::start_game().unwrap();
    let doc = document();

    assert!(doc.get_element_by_id("sc-root").is_some());
    let progress = doc.get_element_by_id("sc-progress").unwrap();
    assert_eq!(progress.text_content().unwrap(), "0 / 4");

    let dialog = doc.get_element_by_id("sc-dialog").unwrap();
    assert_eq!(dialog.get_attribute("style").unwrap(), "display:none;");

    let planet: HtmlElement = doc
        .get_element_by_id("sc-planet-1")
        .unwrap()
        .dyn_into()
        .unwrap();
    planet.click();

    assert_ne!(dialog.get_attribute("style").unwrap(), "display:none;");
    let riddle = doc.get_element_by_id("sc-dialog-riddle").unwrap();
    assert_eq!(
        riddle.text_content().unwrap(),
        "Что можно увидеть с закрытыми глазами?"
    );

    // mounting twice is harmless
    space_cat::start_game().unwrap();
}
