//! 顶点定义
//!
//! 顶点由标识和可选负载组成，相等性只看标识。

use crate::error::{Error, Result};
use crate::types::{PropertyValue, VertexKey};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// 顶点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex<D = PropertyValue> {
    /// 顶点标识（构造后不可变）
    id: VertexKey,
    /// 负载
    data: Option<D>,
}

impl<D> Vertex<D> {
    /// 创建不带负载的顶点
    pub fn new(id: impl Into<VertexKey>) -> Self {
        Self {
            id: id.into(),
            data: None,
        }
    }

    /// 创建带负载的顶点
    pub fn with_data(id: impl Into<VertexKey>, data: D) -> Self {
        Self {
            id: id.into(),
            data: Some(data),
        }
    }

    /// 从可能缺失的标识创建顶点
    pub fn try_new<K: Into<VertexKey>>(id: Option<K>, data: Option<D>) -> Result<Self> {
        let id = id.ok_or_else(|| Error::invalid_argument("顶点 ID 不能为空"))?;
        Ok(Self {
            id: id.into(),
            data,
        })
    }

    /// 从 JSON 值创建顶点，`null` 标识被拒绝
    pub fn from_json(id: serde_json::Value, data: Option<D>) -> Result<Self> {
        Ok(Self {
            id: VertexKey::try_from(id)?,
            data,
        })
    }

    /// 获取顶点标识
    pub fn id(&self) -> &VertexKey {
        &self.id
    }

    /// 获取负载
    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    pub fn data_mut(&mut self) -> Option<&mut D> {
        self.data.as_mut()
    }

    /// 替换负载，返回旧值
    pub fn set_data(&mut self, data: D) -> Option<D> {
        self.data.replace(data)
    }

    /// 清空负载
    pub fn take_data(&mut self) -> Option<D> {
        self.data.take()
    }
}

impl<D> PartialEq for Vertex<D> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<D> Eq for Vertex<D> {}

impl<D> Hash for Vertex<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vertex_id_roundtrip() {
        let v1: Vertex = Vertex::new(1);
        let v2: Vertex = Vertex::new("user_123");
        let v3: Vertex = Vertex::from_json(json!({"x": 0, "y": 0}), None).unwrap();

        assert_eq!(v1.id(), &VertexKey::Int(1));
        assert_eq!(v2.id().as_str(), Some("user_123"));
        assert!(v3.id().is_object());
        assert!(v1.data().is_none());
    }

    #[test]
    fn test_vertex_rejects_missing_id() {
        let err = Vertex::<PropertyValue>::try_new(None::<&str>, None).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let err = Vertex::<PropertyValue>::from_json(json!(null), None).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        assert!(Vertex::<PropertyValue>::try_new(Some("D"), None).is_ok());
    }

    #[test]
    fn test_vertex_equality_ignores_data() {
        let a = Vertex::with_data("D", PropertyValue::from("red"));
        let b = Vertex::with_data("D", PropertyValue::from("blue"));
        let c = Vertex::with_data("E", PropertyValue::from("red"));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_vertex_object_id_key_order() {
        let a: Vertex = Vertex::from_json(json!({"x": 0, "y": 0}), None).unwrap();
        let b: Vertex = Vertex::from_json(json!({"x": 0, "y": 0}), None).unwrap();
        let c: Vertex = Vertex::from_json(json!({"y": 0, "x": 0}), None).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_vertex_accepts_nested_null() {
        let a: Vertex = Vertex::from_json(json!({"x": null}), None).unwrap();
        let b: Vertex = Vertex::from_json(json!({"x": null}), None).unwrap();
        let c: Vertex = Vertex::from_json(json!({"x": 0}), None).unwrap();
        let d: Vertex = Vertex::from_json(json!([1, null]), None).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(d.id().to_string(), "[1,null]");
    }

    #[test]
    fn test_vertex_set_data() {
        let mut v = Vertex::new("A");
        assert_eq!(v.set_data(PropertyValue::from(1i64)), None);
        assert_eq!(
            v.set_data(PropertyValue::from(2i64)),
            Some(PropertyValue::Int(1))
        );
        if let Some(d) = v.data_mut() {
            *d = PropertyValue::from(3i64);
        }
        assert_eq!(v.data(), Some(&PropertyValue::Int(3)));
        assert_eq!(v.take_data(), Some(PropertyValue::Int(3)));
        assert!(v.data().is_none());
    }
}
