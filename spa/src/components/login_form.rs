use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Debug, PartialEq, Default, Clone)]
pub struct LoginFormData {
    pub email: String,
    pub password: String,
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub on_login: Callback<LoginFormData>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

fn input_value(event: &Event) -> Option<String> {
    event
        .target()
        .map(|target| target.unchecked_into::<HtmlInputElement>().value())
}

#[function_component(LoginForm)]
pub fn login_form(props: &Props) -> Html {
    let state = use_state(LoginFormData::default);

    let on_change_email = {
        let state = state.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = input_value(&event) {
                let mut data = (*state).clone();
                data.email = value;
                state.set(data);
            }
        })
    };

    let on_change_password = {
        let state = state.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = input_value(&event) {
                let mut data = (*state).clone();
                data.password = value;
                state.set(data);
            }
        })
    };

    let on_submit = {
        let state = state.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let data = (*state).clone();
            if !data.email.is_empty() && !data.password.is_empty() {
                on_login.emit(data);
            }
        })
    };

    html! {
        <div class="container mt-5">
            <div class="row justify-content-center">
                <div class="col-md-4">
                    <h2 class="text-center mb-4">{ "Sign in" }</h2>
                    if let Some(error) = &props.error {
                        <div class="alert alert-danger">{ error.clone() }</div>
                    }
                    <form onsubmit={on_submit}>
                        <div class="mb-3">
                            <label for="email" class="form-label">{ "Email" }</label>
                            <input id="email" name="email" type="email" class="form-control"
                                placeholder="you@university.edu" onchange={on_change_email} />
                        </div>
                        <div class="mb-3">
                            <label for="password" class="form-label">{ "Password" }</label>
                            <input id="password" name="password" type="password" class="form-control"
                                placeholder="Enter your password" onchange={on_change_password} />
                        </div>
                        <div class="d-grid">
                            <input class="btn btn-primary" type="submit" value="Sign in" />
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
