use crate::KernelError;

#[async_trait::async_trait]
pub trait KeyValueStore: 'static + Sync + Send {
    async fn get(&self, key: &str) -> error_stack::Result<Option<String>, KernelError>;
    async fn set(&self, key: &str, value: String) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnKeyValueStore: 'static + Sync + Send {
    type KeyValueStore: KeyValueStore;
    fn key_value_store(&self) -> &Self::KeyValueStore;
}
