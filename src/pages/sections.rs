use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-gray-50 py-6 shadow-md">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex justify-between items-center">
                <h1 class="text-2xl font-bold text-gray-900">"Love Maps"</h1>
                <nav class="space-x-4">
                    <a href="#features" class="text-gray-700 hover:text-gray-900">"Sobre"</a>
                    <a href="#forms" class="text-gray-700 hover:text-gray-900">"Criar"</a>
                    <a href="#contact" class="text-gray-700 hover:text-gray-900">"Contato"</a>
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative bg-gray-900 text-white py-24">
            <div class="max-w-4xl mx-auto text-center px-4">
                <h2 class="text-5xl font-extrabold">"Crie mapas do amor personalizados"</h2>
                <p class="mt-6 text-xl">
                    "Comemore sua história de amor com um LoveMap personalizado marcando os momentos especiais."
                </p>
                <a
                    href="#forms"
                    class="mt-8 inline-block bg-red-500 px-8 py-4 rounded-lg text-white font-bold text-lg hover:bg-red-600 transition duration-300"
                >
                    "Criar"
                </a>
            </div>
        </section>
    }
}

#[component]
fn Feature(title: &'static str, description: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-5xl" aria-hidden="true">{icon}</div>
            <h4 class="text-xl font-semibold mt-6">{title}</h4>
            <p class="mt-4 text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="py-24 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <h3 class="text-3xl font-bold text-center mb-12">"Por que escolher Love Maps?"</h3>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <Feature
                        icon="📍"
                        title="Localizações Customizadas"
                        description="Selecione os locais que mais importam em seu relacionamento."
                    />
                    <Feature
                        icon="🎨"
                        title="Designs Personalizados"
                        description="Personalize seu mapa com designs e temas exclusivos."
                    />
                    <Feature
                        icon="🖼️"
                        title="Impressões de alta qualidade"
                        description="Obtenha uma versão digital ou uma impressão emoldurada para sua casa."
                    />
                </div>
            </div>
        </section>
    }
}

const FAQ: &[(&str, &str)] = &[
    (
        "Como escolho o local do meu mapa?",
        "Digite um endereço, cidade ou ponto turístico no campo de localização e escolha uma das sugestões.",
    ),
    (
        "Meus dados são enviados para vocês?",
        "Não. A busca de endereços acontece no seu navegador, direto com o OpenStreetMap.",
    ),
    (
        "Posso usar o mapa como presente?",
        "Sim! Gere a prévia, compartilhe a URL personalizada ou peça uma impressão emoldurada.",
    ),
];

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <section id="contact" class="py-24 bg-white">
            <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8">
                <h3 class="text-3xl font-bold mb-12 text-center">"Perguntas Frequentes (FAQ)"</h3>
                <dl class="space-y-6">
                    {FAQ
                        .iter()
                        .map(|(question, answer)| {
                            view! {
                                <div>
                                    <dt class="text-lg font-semibold">{*question}</dt>
                                    <dd class="mt-2 text-gray-600">{*answer}</dd>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </dl>
                <div class="text-center">
                    <a href="#forms" class="mt-12 inline-block bg-gray-900 text-white px-8 py-4 rounded-lg">
                        "Criar meu LoveMap"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-6">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <p class="text-sm">"© 2024 Love Maps. All rights reserved."</p>
            </div>
        </footer>
    }
}
