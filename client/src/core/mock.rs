//! Recording [`ApiService`] double for tests.
//!
//! Every call is appended to a log; responses default to success with small
//! canned data and can be switched to failures per endpoint.

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{
    CartItem, Cupcake, LoginResponse, MessageResponse, OrderLine, ProfileImageResponse,
    PurchaseGroup, SignupRequest, UserProfile, UserUpdate,
};

use super::error::{AppError, Result};
use super::service::{ApiService, ProfileImageUpload};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Login { email: String },
    Signup { email: String },
    GetCupcakes,
    AddToCart { cupcake_id: i64, quantity: u32 },
    GetCart,
    RemoveFromCart { cupcake_id: i64 },
    ClearCart { token: Option<String> },
    SubmitOrder { token: String, item_count: usize },
    GetOrderHistory { token: String },
    GetUserInfo { token: String },
    UpdateUser { update: UserUpdate },
    UpdateProfileImage { file_name: String },
    RemoveProfileImage,
}

#[derive(Default)]
struct Failures {
    login: Option<AppError>,
    signup: Option<AppError>,
    get_cupcakes: Option<AppError>,
    add_to_cart: Option<AppError>,
    get_cart: Option<AppError>,
    clear_cart: Option<AppError>,
    submit_order: Option<AppError>,
    update_user: Option<AppError>,
}

pub(crate) struct MockApiService {
    calls: Mutex<Vec<Call>>,
    failures: Mutex<Failures>,
    cupcakes: Mutex<Vec<Cupcake>>,
    cart: Mutex<Vec<CartItem>>,
    history: Mutex<Vec<PurchaseGroup>>,
    profile: Mutex<UserProfile>,
}

pub(crate) fn cupcake(id: i64, name: &str, price: f64) -> Cupcake {
    Cupcake {
        id,
        name: name.to_string(),
        price,
        description: format!("{name} cupcake"),
        image: format!("{}.png", name.replace(' ', "")),
    }
}

pub(crate) fn cart_item(id: i64, name: &str, price: f64, quantity: u32) -> CartItem {
    CartItem {
        id,
        name: name.to_string(),
        price,
        description: String::new(),
        quantity,
        image: String::new(),
    }
}

impl MockApiService {
    pub(crate) fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(Failures::default()),
            cupcakes: Mutex::new(vec![
                cupcake(1, "Red Velvet", 9.9),
                cupcake(2, "Chocolate Belga", 8.5),
                cupcake(3, "Limão Siciliano", 7.0),
            ]),
            cart: Mutex::new(vec![cart_item(1, "Red Velvet", 9.9, 2), cart_item(3, "Limão Siciliano", 7.0, 1)]),
            history: Mutex::new(vec![PurchaseGroup {
                purchase_id: "p-1".to_string(),
                created_at: "2024-11-20T14:03:11".to_string(),
                items: vec![OrderLine {
                    cupcake_name: "Red Velvet".to_string(),
                    quantity: 2,
                    total_price: 19.8,
                }],
            }]),
            profile: Mutex::new(UserProfile {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                cep: "01001-000".to_string(),
                rua: "Rua A".to_string(),
                estado: "SP".to_string(),
                profile_image: None,
            }),
        }
    }

    pub(crate) fn with_cart(self, items: Vec<CartItem>) -> Self {
        *self.cart.lock() = items;
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub(crate) fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| predicate(call)).count()
    }

    pub(crate) fn fail_login(&self, error: AppError) {
        self.failures.lock().login = Some(error);
    }

    pub(crate) fn fail_signup(&self, error: AppError) {
        self.failures.lock().signup = Some(error);
    }

    pub(crate) fn fail_get_cupcakes(&self, error: AppError) {
        self.failures.lock().get_cupcakes = Some(error);
    }

    pub(crate) fn fail_add_to_cart(&self, error: AppError) {
        self.failures.lock().add_to_cart = Some(error);
    }

    pub(crate) fn fail_get_cart(&self, error: AppError) {
        self.failures.lock().get_cart = Some(error);
    }

    pub(crate) fn fail_clear_cart(&self, error: AppError) {
        self.failures.lock().clear_cart = Some(error);
    }

    pub(crate) fn fail_submit_order(&self, error: AppError) {
        self.failures.lock().submit_order = Some(error);
    }

    pub(crate) fn fail_update_user(&self, error: AppError) {
        self.failures.lock().update_user = Some(error);
    }

    pub(crate) fn succeed_get_cupcakes(&self) {
        self.failures.lock().get_cupcakes = None;
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }

    fn failure(&self, pick: impl Fn(&Failures) -> Option<AppError>) -> Result<()> {
        match pick(&self.failures.lock()) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn ack(message: &str) -> MessageResponse {
    MessageResponse { message: Some(message.to_string()) }
}

#[async_trait]
impl ApiService for MockApiService {
    async fn login(&self, email: String, _password: String) -> Result<LoginResponse> {
        self.record(Call::Login { email });
        self.failure(|f| f.login.clone())?;
        Ok(LoginResponse { token: "token-123".to_string(), message: None, user: None })
    }

    async fn signup(&self, request: SignupRequest) -> Result<MessageResponse> {
        self.record(Call::Signup { email: request.email });
        self.failure(|f| f.signup.clone())?;
        Ok(ack("Usuário cadastrado com sucesso!"))
    }

    async fn get_cupcakes(&self) -> Result<Vec<Cupcake>> {
        self.record(Call::GetCupcakes);
        self.failure(|f| f.get_cupcakes.clone())?;
        Ok(self.cupcakes.lock().clone())
    }

    async fn add_to_cart(&self, cupcake_id: i64, quantity: u32) -> Result<MessageResponse> {
        self.record(Call::AddToCart { cupcake_id, quantity });
        self.failure(|f| f.add_to_cart.clone())?;
        Ok(ack("Item adicionado ao carrinho com sucesso!"))
    }

    async fn get_cart(&self) -> Result<Vec<CartItem>> {
        self.record(Call::GetCart);
        self.failure(|f| f.get_cart.clone())?;
        Ok(self.cart.lock().clone())
    }

    async fn remove_from_cart(&self, cupcake_id: i64) -> Result<MessageResponse> {
        self.record(Call::RemoveFromCart { cupcake_id });
        self.cart.lock().retain(|item| item.id != cupcake_id);
        Ok(ack("Item removido"))
    }

    async fn clear_cart(&self, token: Option<&str>) -> Result<MessageResponse> {
        self.record(Call::ClearCart { token: token.map(str::to_string) });
        self.failure(|f| f.clear_cart.clone())?;
        self.cart.lock().clear();
        Ok(ack("Carrinho limpo"))
    }

    async fn submit_order(&self, token: &str, items: &[CartItem]) -> Result<MessageResponse> {
        self.record(Call::SubmitOrder { token: token.to_string(), item_count: items.len() });
        self.failure(|f| f.submit_order.clone())?;
        Ok(ack("Pedido registrado"))
    }

    async fn get_order_history(&self, token: &str) -> Result<Vec<PurchaseGroup>> {
        self.record(Call::GetOrderHistory { token: token.to_string() });
        Ok(self.history.lock().clone())
    }

    async fn get_user_info(&self, token: &str) -> Result<UserProfile> {
        self.record(Call::GetUserInfo { token: token.to_string() });
        Ok(self.profile.lock().clone())
    }

    async fn update_user(&self, _token: &str, update: &UserUpdate) -> Result<MessageResponse> {
        self.record(Call::UpdateUser { update: update.clone() });
        self.failure(|f| f.update_user.clone())?;
        Ok(ack("Perfil atualizado"))
    }

    async fn update_profile_image(&self, _token: &str, upload: &ProfileImageUpload) -> Result<ProfileImageResponse> {
        self.record(Call::UpdateProfileImage { file_name: upload.file_name() });
        Ok(ProfileImageResponse {
            message: None,
            profile_image: Some(format!("https://cdn.example.com/{}", upload.file_name())),
        })
    }

    async fn remove_profile_image(&self, _token: &str) -> Result<MessageResponse> {
        self.record(Call::RemoveProfileImage);
        self.profile.lock().profile_image = None;
        Ok(ack("Foto removida"))
    }

    fn image_url(&self, file: &str) -> String {
        format!("http://mock/uploads/{file}")
    }
}
