//! 通用类型定义：顶点标识与属性值

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// 顶点标识
///
/// 可以是字符串、数字、布尔值，也可以是由它们组成的列表或对象。
/// 对象按字段顺序逐一比较：字段相同但插入顺序不同的两个对象视为不同的标识。
/// 标识本身不能为 null，列表元素和对象字段可以为 null（以 `None` 表示）。
///
/// 序列化形式为 JSON 值，反序列化经过与 `TryFrom<Value>` 相同的校验。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum VertexKey {
    Bool(bool),
    Int(i64),
    Float(FloatKey),
    Str(String),
    List(Vec<Option<VertexKey>>),
    Object(Vec<(String, Option<VertexKey>)>),
}

/// 非整数的有限浮点数，只能经 `VertexKey::from_f64` 构造
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatKey(u64);

impl FloatKey {
    pub fn value(&self) -> f64 {
        f64::from_bits(self.0)
    }
}

impl VertexKey {
    /// 构造对象标识，保留字段顺序；字段值为 `None` 表示 null
    pub fn object<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Option<VertexKey>>,
    {
        VertexKey::Object(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// 由浮点数构造标识
    ///
    /// 整数值会折叠为 `Int`（`1.0` 与 `1` 相同，`-0.0` 与 `0` 相同），NaN 与无穷大被拒绝。
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::invalid_argument(format!(
                "顶点 ID 不能是非有限数值: {}",
                value
            )));
        }
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            return Ok(VertexKey::Int(value as i64));
        }
        Ok(VertexKey::Float(FloatKey(value.to_bits())))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, VertexKey::Object(_) | VertexKey::List(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            VertexKey::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            VertexKey::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            VertexKey::Int(v) => Some(*v as f64),
            VertexKey::Float(f) => Some(f.value()),
            _ => None,
        }
    }

    // 嵌套位置允许 null
    fn from_nested(value: Value) -> Result<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            other => VertexKey::try_from(other).map(Some),
        }
    }
}

fn write_nested(f: &mut fmt::Formatter<'_>, key: &Option<VertexKey>) -> fmt::Result {
    match key {
        Some(k) => write!(f, "{}", k),
        None => write!(f, "null"),
    }
}

impl fmt::Display for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexKey::Bool(b) => write!(f, "{}", b),
            VertexKey::Int(v) => write!(f, "{}", v),
            VertexKey::Float(v) => write!(f, "{}", v.value()),
            VertexKey::Str(s) => write!(f, "{:?}", s),
            VertexKey::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write_nested(f, item)?;
                }
                write!(f, "]")
            }
            VertexKey::Object(fields) => {
                write!(f, "{{")?;
                for (i, (k, v)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{:?}:", k)?;
                    write_nested(f, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<&str> for VertexKey {
    fn from(v: &str) -> Self {
        VertexKey::Str(v.to_string())
    }
}

impl From<String> for VertexKey {
    fn from(v: String) -> Self {
        VertexKey::Str(v)
    }
}

impl From<&String> for VertexKey {
    fn from(v: &String) -> Self {
        VertexKey::Str(v.clone())
    }
}

impl From<i64> for VertexKey {
    fn from(v: i64) -> Self {
        VertexKey::Int(v)
    }
}

impl From<i32> for VertexKey {
    fn from(v: i32) -> Self {
        VertexKey::Int(v as i64)
    }
}

impl From<u32> for VertexKey {
    fn from(v: u32) -> Self {
        VertexKey::Int(v as i64)
    }
}

impl From<bool> for VertexKey {
    fn from(v: bool) -> Self {
        VertexKey::Bool(v)
    }
}

impl From<&VertexKey> for VertexKey {
    fn from(v: &VertexKey) -> Self {
        v.clone()
    }
}

impl TryFrom<Value> for VertexKey {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Null => Err(Error::invalid_argument("顶点 ID 不能为 null")),
            Value::Bool(b) => Ok(VertexKey::Bool(b)),
            Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Ok(VertexKey::Int(v))
                } else if let Some(v) = n.as_f64() {
                    VertexKey::from_f64(v)
                } else {
                    Err(Error::invalid_argument(format!("无法识别的数值: {}", n)))
                }
            }
            Value::String(s) => Ok(VertexKey::Str(s)),
            Value::Array(items) => items
                .into_iter()
                .map(VertexKey::from_nested)
                .collect::<Result<Vec<_>>>()
                .map(VertexKey::List),
            Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| VertexKey::from_nested(v).map(|v| (k, v)))
                .collect::<Result<Vec<_>>>()
                .map(VertexKey::Object),
        }
    }
}

impl From<VertexKey> for Value {
    fn from(key: VertexKey) -> Self {
        let nested = |k: Option<VertexKey>| k.map(Value::from).unwrap_or(Value::Null);
        match key {
            VertexKey::Bool(b) => Value::Bool(b),
            VertexKey::Int(v) => Value::from(v),
            VertexKey::Float(v) => serde_json::Number::from_f64(v.value())
                .map(Value::Number)
                .unwrap_or(Value::Null),
            VertexKey::Str(s) => Value::String(s),
            VertexKey::List(items) => Value::Array(items.into_iter().map(nested).collect()),
            VertexKey::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, nested(v)))
                    .collect(),
            ),
        }
    }
}


/// 属性值（顶点与边的默认负载类型）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum PropertyValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    List(Vec<PropertyValue>),
    Map(IndexMap<String, PropertyValue>),
}

impl PropertyValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Null => "null",
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Int(_) => "int",
            PropertyValue::Float(_) => "float",
            PropertyValue::String(_) => "string",
            PropertyValue::Bytes(_) => "bytes",
            PropertyValue::List(_) => "list",
            PropertyValue::Map(_) => "map",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, PropertyValue>> {
        match self {
            PropertyValue::Map(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Null => write!(f, "null"),
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Int(v) => write!(f, "{}", v),
            PropertyValue::Float(v) => write!(f, "{}", v),
            PropertyValue::String(s) => write!(f, "{:?}", s),
            PropertyValue::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            PropertyValue::List(items) => {
                let parts: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            PropertyValue::Map(map) => {
                let parts: Vec<String> = map.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                write!(f, "{{{}}}", parts.join(", "))
            }
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Float(v)
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::String(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::String(v.to_string())
    }
}

impl From<Vec<u8>> for PropertyValue {
    fn from(v: Vec<u8>) -> Self {
        PropertyValue::Bytes(v)
    }
}
