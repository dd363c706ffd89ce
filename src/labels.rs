//! Japanese display labels for column names and categorical codes
//!
//! Lookups return `None` for unknown keys; the `display_*` helpers fall back
//! to the raw key so callers can always print something.

/// Label shown in place of a missing cell
pub const MISSING_LABEL: &str = "欠損";

const COLUMN_LABELS: &[(&str, &str)] = &[
    ("Id", "ID"),
    ("MSSubClass", "建物クラス"),
    ("MSZoning", "用途地域"),
    ("LotFrontage", "間口距離"),
    ("LotArea", "敷地面積"),
    ("Street", "接面道路の種類"),
    ("Alley", "路地へのアクセス"),
    ("LotShape", "敷地の形状"),
    ("LandContour", "土地の平坦性"),
    ("Utilities", "公共設備"),
    ("LotConfig", "区画の配置"),
    ("LandSlope", "土地の傾斜"),
    ("Neighborhood", "近隣地域"),
    ("Condition1", "近接条件1"),
    ("Condition2", "近接条件2"),
    ("BldgType", "建物タイプ"),
    ("HouseStyle", "住宅スタイル"),
    ("OverallQual", "全体的な品質"),
    ("OverallCond", "全体的な状態"),
    ("YearBuilt", "建築年"),
    ("YearRemodAdd", "改築年"),
    ("RoofStyle", "屋根のスタイル"),
    ("RoofMatl", "屋根の素材"),
    ("Exterior1st", "外装材1"),
    ("Exterior2nd", "外装材2"),
    ("MasVnrType", "石積みタイプ"),
    ("MasVnrArea", "石積み面積"),
    ("ExterQual", "外装の品質"),
    ("ExterCond", "外装の状態"),
    ("Foundation", "基礎のタイプ"),
    ("BsmtQual", "地下室の高さ"),
    ("BsmtCond", "地下室の状態"),
    ("BsmtExposure", "地下室の露出"),
    ("BsmtFinType1", "地下室仕上がり1"),
    ("BsmtFinSF1", "地下室仕上がり面積1"),
    ("BsmtFinType2", "地下室仕上がり2"),
    ("BsmtFinSF2", "地下室仕上がり面積2"),
    ("BsmtUnfSF", "地下室未仕上がり面積"),
    ("TotalBsmtSF", "地下室合計面積"),
    ("Heating", "暖房の種類"),
    ("HeatingQC", "暖房の品質"),
    ("CentralAir", "中央空調"),
    ("Electrical", "電気システム"),
    ("1stFlrSF", "1階面積"),
    ("2ndFlrSF", "2階面積"),
    ("LowQualFinSF", "低品質仕上がり面積"),
    ("GrLivArea", "地上居住面積"),
    ("BsmtFullBath", "地下フルバス"),
    ("BsmtHalfBath", "地下ハーフバス"),
    ("FullBath", "フルバス"),
    ("HalfBath", "ハーフバス"),
    ("BedroomAbvGr", "ベッドルーム数"),
    ("KitchenAbvGr", "キッチン数"),
    ("KitchenQual", "キッチンの品質"),
    ("TotRmsAbvGrd", "総部屋数"),
    ("Functional", "機能性"),
    ("Fireplaces", "暖炉数"),
    ("FireplaceQu", "暖炉の品質"),
    ("GarageType", "ガレージタイプ"),
    ("GarageYrBlt", "ガレージ建築年"),
    ("GarageFinish", "ガレージ仕上がり"),
    ("GarageCars", "ガレージ駐車台数"),
    ("GarageArea", "ガレージ面積"),
    ("GarageQual", "ガレージ品質"),
    ("GarageCond", "ガレージ状態"),
    ("PavedDrive", "舗装された私道"),
    ("WoodDeckSF", "ウッドデッキ面積"),
    ("OpenPorchSF", "オープンポーチ面積"),
    ("EnclosedPorch", "囲いポーチ面積"),
    ("3SsnPorch", "3シーズンポーチ面積"),
    ("ScreenPorch", "スクリーンポーチ面積"),
    ("PoolArea", "プール面積"),
    ("PoolQC", "プール品質"),
    ("Fence", "フェンス"),
    ("MiscFeature", "その他機能"),
    ("MiscVal", "その他価値"),
    ("MoSold", "販売月"),
    ("YrSold", "販売年"),
    ("SaleType", "販売タイプ"),
    ("SaleCondition", "販売条件"),
    ("SalePrice", "販売価格"),
];

const VALUE_LABELS: &[(&str, &str)] = &[
    ("RL", "低密度住宅地"),
    ("RM", "中密度住宅地"),
    ("C (all)", "商業地"),
    ("FV", "水上集落"),
    ("RH", "高密度住宅地"),
    ("Pave", "舗装"),
    ("Grvl", "砂利"),
    ("Reg", "正規形"),
    ("IR1", "やや不規則"),
    ("IR2", "不規則"),
    ("IR3", "かなり不規則"),
    ("Lvl", "平坦"),
    ("Bnk", "傾斜"),
    ("HLS", "丘陵"),
    ("Low", "低地"),
    ("AllPub", "全公共設備"),
    ("NoSewr", "下水なし"),
    ("NoSeWa", "下水・水なし"),
    ("Elo", "電気のみ"),
    ("Inside", "内側"),
    ("Corner", "コーナー"),
    ("CulDSac", "袋小路"),
    ("FR2", "2面接道"),
    ("FR3", "3面接道"),
    ("Gtl", "緩やか"),
    ("Mod", "中程度"),
    ("Sev", "急勾配"),
    ("1Fam", "一戸建て"),
    ("2fmCon", "2世帯"),
    ("Duplex", "2連棟"),
    ("TwnhsE", "タウンハウス（端）"),
    ("Twnhs", "タウンハウス（中）"),
    ("1Story", "1階建て"),
    ("1.5Fin", "1.5階建て（完了）"),
    ("1.5Unf", "1.5階建て（未完）"),
    ("2Story", "2階建て"),
    ("2.5Fin", "2.5階建て（完了）"),
    ("2.5Unf", "2.5階建て（未完）"),
    ("SFoyer", "スプリットホワイエ"),
    ("SLvl", "スプリットレベル"),
    ("Gable", "切妻"),
    ("Hip", "寄棟"),
    ("Gambrel", "腰折れ"),
    ("Mansard", "マンサード"),
    ("Flat", "平屋根"),
    ("Shed", "片流れ"),
    ("Ex", "優秀"),
    ("Gd", "良"),
    ("TA", "平均"),
    ("Fa", "可"),
    ("Po", "不可"),
    ("PConc", "打設コンクリート"),
    ("CBlock", "コンクリートブロック"),
    ("Y", "はい"),
    ("N", "いいえ"),
    ("SBrkr", "標準ブレーカー"),
    ("FuseA", "ヒューズA"),
    ("FuseF", "ヒューズF"),
    ("FuseP", "ヒューズP"),
    ("Mix", "混合"),
    ("WD", "保証証書"),
    ("CWD", "現金保証証書"),
    ("VWD", "バリデーション保証証書"),
    ("New", "新築"),
    ("COD", "着払い"),
    ("Con", "契約"),
    ("ConLw", "契約（低金利）"),
    ("ConLI", "契約（低頭金）"),
    ("ConLD", "契約（低頭金）"),
    ("Oth", "その他"),
    ("Normal", "通常"),
    ("Abnorml", "異常"),
    ("AdjLand", "隣接地"),
    ("Alloca", "割り当て"),
    ("Family", "家族間"),
    ("Partial", "一部完了"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Label for a dataset column
pub fn column_label(column: &str) -> Option<&'static str> {
    lookup(COLUMN_LABELS, column)
}

/// Label for a categorical code such as `RL` or `Gd`
pub fn value_label(value: &str) -> Option<&'static str> {
    lookup(VALUE_LABELS, value)
}

/// `GrLivArea (地上居住面積)`, or the bare name when no label is known
pub fn display_column(column: &str) -> String {
    match column_label(column) {
        Some(label) => format!("{} ({})", column, label),
        None => column.to_string(),
    }
}

/// Cell text with its label appended; missing cells render as [`MISSING_LABEL`]
pub fn display_value(value: Option<&str>) -> String {
    match value {
        None => MISSING_LABEL.to_string(),
        Some(v) => match value_label(v) {
            Some(label) => format!("{} ({})", v, label),
            None => v.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_column_has_unique_key() {
        let mut keys: Vec<&str> = COLUMN_LABELS.iter().map(|(k, _)| *k).collect();
        let n = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), n);
        assert_eq!(n, 81);
    }

    #[test]
    fn test_column_lookup() {
        assert_eq!(column_label("SalePrice"), Some("販売価格"));
        assert_eq!(column_label("Unknown"), None);
        assert_eq!(display_column("GrLivArea"), "GrLivArea (地上居住面積)");
        assert_eq!(display_column("Extra"), "Extra");
    }

    #[test]
    fn test_value_lookup() {
        assert_eq!(display_value(Some("RL")), "RL (低密度住宅地)");
        assert_eq!(display_value(Some("1500")), "1500");
        assert_eq!(display_value(None), "欠損");
    }
}
