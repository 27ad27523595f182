// 押韻注記付きの詩の 1 行の解析
//
// 行はフレーズ区切りで分割され，フレーズごとに漢字・韻字・韻字の位置・韻の分類を取り出す
// 注記の誤りはエラーにせず，できる範囲で解釈する：
// - 漢字が続かないまま次の分類記号やフレーズの終わりが来た分類記号は捨てる
// - 漢字でも分類記号でもない文字（句読点・空白・数字など）は読み飛ばす

pub mod parser;
pub mod tokenizer;
