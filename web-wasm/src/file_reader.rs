//! ファイル読み込み（FileReader.readAsDataURL）
//!
//! 読み込みは枠ごとに独立した非同期処理で、互いに待たない。

use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Event, File, FileReader, HtmlInputElement, ProgressEvent};

type Sender = Rc<RefCell<Option<oneshot::Sender<Result<String, String>>>>>;

/// `<input type="file">` のchangeイベントから先頭ファイルを取り出す
pub fn selected_file(ev: &Event) -> Option<File> {
    let input: HtmlInputElement = ev.target()?.dyn_into().ok()?;
    let file = input.files()?.get(0);
    // 同じファイルを選び直しても change が発火するように
    input.set_value("");
    file
}

/// ファイルをData URIとして読み込む
pub async fn read_as_data_uri(file: File) -> Result<String, String> {
    let file_name = file.name();
    let reader = FileReader::new().map_err(js_error)?;
    let (tx, rx) = oneshot::channel();
    let tx: Sender = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let reader = reader.clone();
        let tx = tx.clone();
        Closure::<dyn FnMut(ProgressEvent)>::new(move |_| {
            let result = reader.result().map_err(js_error).and_then(|value| {
                value
                    .as_string()
                    .ok_or_else(|| "読込失敗: 文字列に変換できません".to_string())
            });
            send(&tx, result);
        })
    };

    let onerror = {
        let tx = tx.clone();
        let file_name = file_name.clone();
        Closure::<dyn FnMut(ProgressEvent)>::new(move |_| {
            send(&tx, Err(format!("読込失敗: {}", file_name)));
        })
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader.read_as_data_url(&file).map_err(js_error)?;

    let result = rx
        .await
        .unwrap_or_else(|_| Err(format!("読込が中断されました: {}", file_name)));

    reader.set_onload(None);
    reader.set_onerror(None);
    drop((onload, onerror));

    result
}

fn send(tx: &Sender, result: Result<String, String>) {
    if let Some(tx) = tx.borrow_mut().take() {
        let _ = tx.send(result);
    }
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
