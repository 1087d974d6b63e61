//! ファイルシステム Outbound ポート
//!
//! 設定・履歴・ログ・ドシエの読み書きはすべてここを通る。

use crate::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};

pub trait FileSystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> Result<String, Error>;
    fn write(&self, path: &Path, contents: &str) -> Result<(), Error>;
    fn rename(&self, from: &Path, to: &Path) -> Result<(), Error>;
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    fn exists(&self, path: &Path) -> bool;
    /// 追記用に開く（無ければ作る）。drop で閉じる
    fn open_append(&self, path: &Path) -> Result<Box<dyn Write + Send>, Error>;

    /// 中身を丸ごと置き換える
    ///
    /// 親ディレクトリを作り、`<path>.tmp` に書いてから rename する。
    /// 途中で落ちても元のファイルは壊れない。
    fn replace_contents(&self, path: &Path, contents: &str) -> Result<(), Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.create_dir_all(parent)?;
        }
        let tmp = tmp_path(path);
        self.write(&tmp, contents)?;
        self.rename(&tmp, path)
    }
}

/// `replace_contents` が使う一時ファイルのパス
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut s = path.as_os_str().to_owned();
    s.push(".tmp");
    PathBuf::from(s)
}
